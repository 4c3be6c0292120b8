//! Presentation layer for quizdrill
//!
//! This crate contains the CLI definition, the console prompter the
//! session driver talks through, and the final score formatters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::prompter::ConsolePrompter;
