//! Port definitions (interfaces to the outside world)

pub mod answer_source;
pub mod observer;
