//! Static text screens: the rules document and the win banner.
//!
//! Both are externally supplied text files. They are opened, read fully,
//! and released before anything else happens; the core only decides *when*
//! they appear, never what they say. The win banner streams one row at a
//! time with a purely cosmetic delay.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

/// Delay between win-banner rows.
const BANNER_ROW_DELAY: Duration = Duration::from_millis(100);

/// Print the rules text, then block until the player presses enter.
pub fn show_rules(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading rules text from {}", path.display()))?;

    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    writeln!(stdout)?;
    stdout.flush()?;
    wait_for_enter()
}

/// Stream the win banner row by row with a short delay.
pub fn show_winner(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading win banner from {}", path.display()))?;

    let mut stdout = io::stdout();
    for row in text.lines() {
        writeln!(stdout, "{row}")?;
        stdout.flush()?;
        thread::sleep(BANNER_ROW_DELAY);
    }
    Ok(())
}

/// Block on one line of input and discard it.
pub fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_error_names_the_path() {
        let err = show_winner(Path::new("no/such/banner.txt")).unwrap_err();
        assert!(err.to_string().contains("no/such/banner.txt"));
    }
}
