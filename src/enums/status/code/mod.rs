//! Status catalog implementations.

mod matched;
mod original;

pub use matched::lookup_match;
pub use original::{lookup_original, Status};

use crate::utils::VariantInfo;

/// Maps a status to its `(code, message)` pair
pub type LookupFn = fn(Status) -> (i32, &'static str);

/// All lookup strategies; the first one is the reference.
pub fn available_variants() -> Vec<VariantInfo<LookupFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Constant table indexed by discriminant",
            function: lookup_original,
        },
        VariantInfo {
            name: "match",
            description: "Exhaustive match expression",
            function: lookup_match,
        },
    ]
}
