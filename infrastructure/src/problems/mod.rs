//! Problem set suppliers

pub mod csv_loader;
