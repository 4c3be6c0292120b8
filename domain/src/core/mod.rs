//! Core domain entities

pub mod error;
pub mod problem;
