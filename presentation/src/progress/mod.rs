//! Session progress display

pub mod prompter;
