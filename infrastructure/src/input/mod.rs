//! Input adapters

pub mod stdin_source;
