use anyhow::Result;
use clap::Parser;

use wordle_unlimited::{Game, RoundSettings};

/// Wordle in the terminal, with an adjustable board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of attempts (board rows)
    #[arg(short, long, default_value_t = 6)]
    attempts: usize,

    /// Word length (board columns)
    #[arg(short, long, default_value_t = 5)]
    letters: usize,

    /// Fetch targets and spell-check guesses against online word APIs
    #[arg(long)]
    online: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = RoundSettings::clamped(cli.attempts, cli.letters);
    let mut game = Game::new(settings, cli.online)?;
    game.run()
}
