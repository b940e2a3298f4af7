mod battle;
mod chance;
mod error;
mod game;
mod menu;
mod messages;
mod prompt;
mod renderer;
mod session;
mod terminal;
#[cfg(test)]
mod testing;
mod weapon;

use std::process::ExitCode;

use crossterm::execute;
use crossterm::terminal::SetTitle;
use tracing_subscriber::EnvFilter;

use chance::RandomChance;
use game::Game;
use renderer::CliRenderer;
use terminal::Terminal;

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Usage: rps-arena [SEED]
    // No flags. The single optional positional argument is a u64 seed that
    // makes the opponent and flavor lines reproducible; anything else is
    // ignored and the OS seeds the generator.
    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let chance = match seed {
        Some(seed) => RandomChance::seeded(seed),
        None => RandomChance::from_os(),
    };

    if let Err(e) = execute!(std::io::stdout(), SetTitle("Rock-Paper-Scissors Arena")) {
        tracing::warn!(error = %e, "could not set the window title");
    }

    let mut game = Game::new(CliRenderer::new(), Terminal::new(), chance);
    match game.run() {
        Ok(stats) => {
            tracing::debug!(?stats, "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n{}", e);
            ExitCode::FAILURE
        }
    }
}
