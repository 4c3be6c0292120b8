//! Console output formatter for session reports

use colored::Colorize;
use drill_domain::{SessionOutcome, SessionReport};

/// Formats session reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the final score line
    pub fn format(report: &SessionReport) -> String {
        let score = format!("{} / {}", report.correct, report.total);
        let score = if report.is_perfect() {
            score.green().bold()
        } else {
            score.yellow().bold()
        };

        match report.outcome {
            SessionOutcome::DeadlineExpired => {
                format!("\n{}\nYou scored {}", "Time's up!".red().bold(), score)
            }
            SessionOutcome::InputClosed => {
                format!("\nYou scored {}", score)
            }
            SessionOutcome::Exhausted => format!("You scored {}", score),
        }
    }

    /// Format the report as JSON
    pub fn format_json(report: &SessionReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
