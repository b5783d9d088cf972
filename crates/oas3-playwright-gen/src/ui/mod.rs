pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::{Cli, Commands, GenerateCommand, ListCommands};
pub use colors::Colors;

/// Falls back to 100 columns when stdout is not a usable terminal.
fn term_width() -> u16 {
  crossterm::terminal::size()
    .ok()
    .map(|(width, _)| width)
    .filter(|&width| width >= 40)
    .unwrap_or(100)
}
