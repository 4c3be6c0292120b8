//! Session report and terminal outcomes
//!
//! A session runs `Idle → Running` and ends in exactly one of the
//! [`SessionOutcome`] states. Whichever way it ends, the caller gets one
//! [`SessionReport`].

use serde::{Deserialize, Serialize};

/// How a session reached its terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Every problem in the set was presented and answered
    Exhausted,
    /// The session-wide deadline fired before the set was exhausted
    DeadlineExpired,
    /// The answer stream closed (EOF) before the set was exhausted
    InputClosed,
}

/// The result of one quiz session
///
/// `correct` counts exact post-trim matches seen before the terminal
/// state; `presented` counts how many prompts were actually shown. Both
/// are bounded by `total`, the size of the problem set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Number of correctly answered problems
    pub correct: usize,
    /// Number of problems presented before the session ended
    pub presented: usize,
    /// Total number of problems in the set
    pub total: usize,
    /// How the session ended
    pub outcome: SessionOutcome,
}

impl SessionReport {
    /// Create a new report
    ///
    /// Debug builds assert the counting invariant; release builds trust
    /// the driver.
    pub fn new(correct: usize, presented: usize, total: usize, outcome: SessionOutcome) -> Self {
        debug_assert!(correct <= presented && presented <= total);
        Self {
            correct,
            presented,
            total,
            outcome,
        }
    }

    /// Whether every presented problem was answered correctly
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}
