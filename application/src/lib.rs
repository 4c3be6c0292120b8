//! Application layer for quizdrill
//!
//! This crate contains the session driver use case and the port
//! definitions it talks through. It depends only on the domain layer.
//!
//! The driver itself is [`RunSessionUseCase`]: it walks an ordered
//! problem set, racing each wait for an answer against a single
//! session-wide deadline, and returns a [`drill_domain::SessionReport`]
//! the moment either the set is exhausted or the deadline fires.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_source::{AnswerSource, ScriptedAnswerSource},
    observer::{NoObserver, SessionObserver},
};
pub use use_cases::run_session::{RunSessionError, RunSessionInput, RunSessionUseCase};
