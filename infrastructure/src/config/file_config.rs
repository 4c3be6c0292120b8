//! Raw TOML configuration data types
//!
//! This struct represents the exact structure of the TOML config file.
//! CLI flags override whatever is loaded from files.
//!
//! Example configuration:
//!
//! ```toml
//! problems = "capitals.csv"
//! timeout_secs = 60
//! shuffle = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to the problems CSV file
    pub problems: PathBuf,
    /// Session deadline in seconds
    pub timeout_secs: u64,
    /// Randomize problem order before the session starts
    pub shuffle: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            problems: PathBuf::from("problems.csv"),
            timeout_secs: 30,
            shuffle: false,
        }
    }
}

impl FileConfig {
    /// The session deadline as a [`Duration`]
    ///
    /// Zero is representable here; the session driver rejects it when
    /// the session starts.
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
