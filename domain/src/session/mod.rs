//! Session results

pub mod report;
