//! Session observer port
//!
//! Defines the interface for presenting a running session to the user.
//! The driver emits prompts and per-answer results through this port and
//! does no formatting of its own.

use drill_domain::Problem;

/// Callback for session progress
///
/// Implementations live in the presentation layer and can display the
/// session in various ways (console, test capture, etc.)
pub trait SessionObserver: Send + Sync {
    /// Called when a problem is presented, before waiting for an answer
    fn on_prompt(&self, index: usize, problem: &Problem);

    /// Called after an answer was evaluated
    fn on_answer(&self, _index: usize, _correct: bool) {}

    /// Called once when the deadline fires mid-session
    fn on_deadline(&self) {}
}

/// No-op observer for when presentation is not needed
pub struct NoObserver;

impl SessionObserver for NoObserver {
    fn on_prompt(&self, _index: usize, _problem: &Problem) {}
}
