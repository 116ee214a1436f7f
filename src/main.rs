//! Terminal front end: the blocking read loop around the game core.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use pyramid_solitaire::core::GameRng;
use pyramid_solitaire::game::{GameSession, TurnOutcome};
use pyramid_solitaire::ui::{parse_command, render, screens};

#[derive(Parser, Debug)]
#[command(name = "pyramid", about = "Pyramid solitaire for the terminal")]
struct Args {
    /// RNG seed for a reproducible deal. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Rules text shown at startup and by the `rules` command.
    #[arg(long, default_value = "assets/rules.txt")]
    rules: PathBuf,

    /// Banner streamed when a game is won.
    #[arg(long, default_value = "assets/winner.txt")]
    banner: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut session = GameSession::from_rng(rng);

    screens::show_rules(&args.rules)?;
    loop {
        play_until_won(&mut session, &args)?;
        screens::show_winner(&args.banner)?;
        println!("{}", "Press enter for new game".green());
        screens::wait_for_enter()?;
        session.restart();
    }
}

/// One game: update, render, and prompt until the win condition holds.
fn play_until_won(session: &mut GameSession, args: &Args) -> Result<()> {
    while !session.is_won() {
        session.update();
        clear_screen()?;
        print!("{}", render(session));

        // Inner prompt loop: repeat until a recognized command ends the turn
        loop {
            let line: String = Input::new()
                .with_prompt(">>>")
                .allow_empty(true)
                .interact_text()?;

            let Some(command) = parse_command(&line) else {
                continue;
            };
            match session.apply(command) {
                TurnOutcome::Advanced => break,
                TurnOutcome::Ignored => continue,
                TurnOutcome::ShowRules => screens::show_rules(&args.rules)?,
                TurnOutcome::Exit => process::exit(0),
            }
        }
    }
    Ok(())
}

fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    // ANSI: clear and move the cursor home
    write!(stdout, "\x1b[2J\x1b[1;1H")?;
    stdout.flush()?;
    Ok(())
}
