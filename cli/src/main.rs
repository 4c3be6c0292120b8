//! CLI entrypoint for quizdrill
//!
//! This is the main binary that wires together all layers: CSV problems
//! in, a stdin-backed answer source, one deadline-bounded session, and
//! the final score out.

use anyhow::{Context, Result, bail};
use clap::Parser;
use drill_application::{RunSessionInput, RunSessionUseCase};
use drill_infrastructure::{ConfigLoader, CsvProblemLoader, StdinAnswerSource};
use drill_presentation::{Cli, ConsoleFormatter, ConsolePrompter, OutputFormat};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Config files first, CLI flags on top
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let problems_path = cli.problems.unwrap_or(config.problems);
    let timeout_secs = cli.timeout.unwrap_or(config.timeout_secs);
    let shuffle = cli.shuffle || config.shuffle;

    if timeout_secs == 0 {
        bail!("Timeout must be greater than zero");
    }
    let deadline = Duration::from_secs(timeout_secs);

    let problems = CsvProblemLoader::load(&problems_path)
        .with_context(|| format!("Failed to load problems from {}", problems_path.display()))?;
    info!(
        "Loaded {} problems from {}",
        problems.len(),
        problems_path.display()
    );

    let mut input = RunSessionInput::new(problems, deadline);
    if shuffle {
        input = input.shuffled();
    }

    let total = input.problems.len();

    // === Dependency Injection ===
    // One token shared by the stdin producer and the session driver: the
    // driver cancels it on every terminal path, which stops the reader.
    let token = CancellationToken::new();
    let source = StdinAnswerSource::spawn(token.clone());
    let mut use_case = RunSessionUseCase::new(source).with_cancellation(token);

    // The clock starts at execute, not here: wait for the user to say
    // they are ready. JSON mode is assumed piped, no gate.
    if !matches!(cli.output, OutputFormat::Json) {
        println!("{} questions, {} seconds on the clock.", total, timeout_secs);
        println!("Press enter to start");
        use_case.wait_for_start().await;
        println!();
    }

    let prompter = ConsolePrompter::new().with_feedback(cli.feedback);
    let report = use_case.execute_with_observer(input, &prompter).await?;

    match cli.output {
        OutputFormat::Human => println!("{}", ConsoleFormatter::format(&report)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
    }

    Ok(())
}
