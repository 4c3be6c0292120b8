//! Domain layer for quizdrill
//!
//! This crate contains the core entities and value objects of a quiz
//! session. It has no dependencies on infrastructure or presentation
//! concerns, and no async code.
//!
//! # Core Concepts
//!
//! ## Problem
//!
//! A prompt paired with the one answer that counts as correct. The
//! matching rule lives here: candidate answers are trimmed of
//! surrounding whitespace and compared exactly, case-sensitively.
//!
//! ## Session
//!
//! One run of the driver over an ordered [`ProblemSet`], bounded by a
//! single session-wide deadline. It ends in exactly one of three ways
//! (see [`SessionOutcome`]) and produces one [`SessionReport`].

pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    problem::{Problem, ProblemSet},
};
pub use crate::session::report::{SessionOutcome, SessionReport};
