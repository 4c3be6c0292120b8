//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final score
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable score line
    Human,
    /// JSON rendering of the full session report
    Json,
}

/// CLI arguments for quizdrill
#[derive(Parser, Debug)]
#[command(name = "quizdrill")]
#[command(author, version, about = "Timed quiz runner - answer before the clock runs out")]
#[command(long_about = r#"
Quizdrill reads prompt/answer pairs from a two-column CSV file and quizzes
you on them one at a time. A single deadline covers the whole session: the
quiz stops the moment the clock runs out, however many questions remain.

Answers are compared exactly (case-sensitive) after trimming surrounding
whitespace.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizdrill.toml    Project-level config
3. ~/.config/quizdrill/config.toml   Global config

Example:
  quizdrill --problems capitals.csv --timeout 60
  quizdrill --shuffle
"#)]
pub struct Cli {
    /// Path to the problems CSV file
    #[arg(short, long, value_name = "PATH")]
    pub problems: Option<PathBuf>,

    /// Maximum duration of the session, in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Randomize quiz order
    #[arg(short, long)]
    pub shuffle: bool,

    /// Echo right/wrong after each answer
    #[arg(short, long)]
    pub feedback: bool,

    /// Output format for the final score
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
