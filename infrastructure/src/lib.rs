//! Infrastructure layer for quizdrill
//!
//! This crate contains the adapters around the session driver: the
//! background stdin producer feeding the answer-source port, CSV problem
//! loading, and file configuration.

pub mod config;
pub mod input;
pub mod problems;

// Re-export commonly used types
pub use config::{file_config::FileConfig, loader::ConfigLoader};
pub use input::stdin_source::StdinAnswerSource;
pub use problems::csv_loader::{CsvProblemLoader, LoadError};
