//! Closed-set enumerations with per-variant data and behavior.

pub mod operation;
pub mod status;
