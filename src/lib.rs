//! # Closed-Variants
//!
//! Closed-set enumerations whose variants carry their own data and behavior.
//!
//! - [`enums::status`]: a fixed status catalog with a code and message per variant
//! - [`enums::operation`]: binary integer operations dispatched per variant
//! - [`exceptions::taxonomy`]: checked versus unchecked error categories

pub mod cli;
pub mod enums;
pub mod error;
pub mod exceptions;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use enums::operation::{Calculator, Operation};
pub use enums::status::Status;
pub use error::ArithmeticError;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::enums::operation::{Calculator, Operation};
    pub use crate::enums::status::Status;
    pub use crate::error::{ArithmeticError, ParseVariantError};
    pub use crate::registry::{build_registry, TopicRegistry, TopicRunner};
}
