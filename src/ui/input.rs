//! Raw input parsing.
//!
//! The command protocol, one line per prompt:
//!
//! | Input             | Command            |
//! |-------------------|--------------------|
//! | empty line        | `Draw`             |
//! | `winnow`          | `Winnow` (cheat)   |
//! | `restart`         | `Restart`          |
//! | `exit`            | `Exit`             |
//! | `rules`           | `Rules`            |
//! | `R1.C1 R2.C2`     | `Match`            |
//! | anything else     | `None` (re-prompt) |

use crate::cards::Coord;
use crate::game::Command;

/// Parse one raw input line. `None` means unrecognized: re-prompt.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    match line {
        "" => Some(Command::Draw),
        "winnow" => Some(Command::Winnow),
        "restart" => Some(Command::Restart),
        "exit" => Some(Command::Exit),
        "rules" => Some(Command::Rules),
        _ => parse_match(line),
    }
}

/// Parse a `R1.C1 R2.C2` coordinate pair, digits only, one space between.
fn parse_match(line: &str) -> Option<Command> {
    let (first, second) = line.split_once(' ')?;
    Some(Command::Match(parse_coord(first)?, parse_coord(second)?))
}

fn parse_coord(token: &str) -> Option<Coord> {
    let (row, col) = token.split_once('.')?;
    Some(Coord::new(parse_number(row)?, parse_number(col)?))
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command(""), Some(Command::Draw));
        assert_eq!(parse_command("winnow"), Some(Command::Winnow));
        assert_eq!(parse_command("restart"), Some(Command::Restart));
        assert_eq!(parse_command("exit"), Some(Command::Exit));
        assert_eq!(parse_command("rules"), Some(Command::Rules));
    }

    #[test]
    fn test_coordinate_pair() {
        assert_eq!(
            parse_command("1.1 7.4"),
            Some(Command::Match(Coord::new(1, 1), Coord::new(7, 4)))
        );
        assert_eq!(
            parse_command("0.0 3.2"),
            Some(Command::Match(Coord::DRAW_PILE, Coord::new(3, 2)))
        );
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(parse_command("help"), None);
        assert_eq!(parse_command("RESTART"), None);
        assert_eq!(parse_command(" "), None);
        assert_eq!(parse_command("1.1"), None);
        assert_eq!(parse_command("1.1 2"), None);
        assert_eq!(parse_command("1.1  2.2"), None);
        assert_eq!(parse_command("a.b c.d"), None);
        assert_eq!(parse_command("1.-1 2.2"), None);
        assert_eq!(parse_command("1.1 2.2 3.3"), None);
        assert_eq!(parse_command("99999999999999999999.1 1.1"), None);
    }

    #[test]
    fn test_out_of_range_coordinates_still_parse() {
        // Range checking belongs to the session, not the parser
        assert_eq!(
            parse_command("9.9 0.1"),
            Some(Command::Match(Coord::new(9, 9), Coord::new(0, 1)))
        );
    }
}
