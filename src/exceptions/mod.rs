//! Error handling demonstrations.

pub mod taxonomy;
