//! Console prompter
//!
//! Adapter for the application's `SessionObserver` port: writes each
//! prompt to stdout and leaves the cursor on the same line, the way a
//! terminal quiz reads.

use colored::Colorize;
use drill_application::SessionObserver;
use drill_domain::Problem;
use std::io::Write;

/// Writes prompts and per-answer feedback to the terminal
pub struct ConsolePrompter {
    /// Echo a checkmark/cross after each answer
    feedback: bool,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self { feedback: false }
    }

    /// Enable per-answer right/wrong feedback
    pub fn with_feedback(mut self, feedback: bool) -> Self {
        self.feedback = feedback;
        self
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ConsolePrompter {
    fn on_prompt(&self, index: usize, problem: &Problem) {
        // No trailing newline: the answer is typed on the prompt line.
        // Flush, or the prompt sits in the buffer while we wait.
        print!(
            "{} {} : ",
            format!("Question {}:", index + 1).cyan().bold(),
            problem.prompt()
        );
        let _ = std::io::stdout().flush();
    }

    fn on_answer(&self, _index: usize, correct: bool) {
        if self.feedback {
            if correct {
                println!("{}", "correct".green());
            } else {
                println!("{}", "wrong".red());
            }
        }
    }

    fn on_deadline(&self) {
        // The user is mid-line when the timer fires; break the line so
        // the score does not share it with an unanswered prompt.
        println!();
    }
}
