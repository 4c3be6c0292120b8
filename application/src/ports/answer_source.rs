//! Answer source port
//!
//! The driver never reads input itself. It pulls typed answers through
//! this port, one at a time, and races each pull against the session
//! deadline.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerSource`] - defined here in the application layer
//! - **Adapter**: `StdinAnswerSource` - implemented in the
//!   infrastructure layer on top of a background reader task
//!
//! # Built-in Implementations
//!
//! - [`ScriptedAnswerSource`] - replays a fixed list of answers; used in
//!   tests and anywhere input is known up front.

use async_trait::async_trait;
use std::collections::VecDeque;

/// Port supplying typed answers to the session driver.
///
/// # Cancel safety
///
/// The driver drops the `next_answer` future whenever the deadline wins
/// the race. Implementations must not lose an answer when that happens:
/// an answer is consumed only when the future completes. The stdin
/// adapter gets this for free from `tokio::sync::mpsc::Receiver::recv`.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next typed answer.
    ///
    /// Returns `None` once the underlying stream is closed (EOF) and no
    /// buffered answer remains. After `None`, every later call must also
    /// return `None`.
    async fn next_answer(&mut self) -> Option<String>;
}

/// Answer source that replays a fixed sequence, then reports EOF.
pub struct ScriptedAnswerSource {
    answers: VecDeque<String>,
}

impl ScriptedAnswerSource {
    /// Create a source that yields the given answers in order
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a source that yields nothing (immediate EOF)
    pub fn empty() -> Self {
        Self {
            answers: VecDeque::new(),
        }
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswerSource {
    async fn next_answer(&mut self) -> Option<String> {
        self.answers.pop_front()
    }
}
