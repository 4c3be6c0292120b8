//! Use cases

pub mod run_session;
