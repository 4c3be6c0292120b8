//! File configuration

pub mod file_config;
pub mod loader;
