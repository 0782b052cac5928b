// stepdeck entry point.
// Loads the deck manifest, sets up the terminal, and runs the event loop.

mod app;
mod deck;
mod error;
mod fetch;
mod state;
mod theme;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use app::App;
use deck::Deck;

#[tokio::main]
async fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("deck.json"));

    let deck = match Deck::from_path(&path) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("stepdeck: failed to load {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    // Relative resource locators resolve against the deck's directory.
    let base = path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
    let mut app = match App::new(deck, &base) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("stepdeck: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stepdeck: {e}");
            ExitCode::FAILURE
        }
    }
}
