//! Error type for the fallible edges of the crate.
//!
//! The sort engine itself cannot fail; errors only arise when turning
//! untyped input (strategy names, generator bounds, free-form text) into
//! the engine's typed inputs.

use crate::core::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Strategy name is not one of `hybrid`, `quicksort`, `insertion`.
    #[error("unknown sort strategy {0:?} (expected hybrid, quicksort or insertion)")]
    InvalidStrategy(String),

    /// Generator bounds are inverted.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: Value, max: Value },

    /// Custom input text contained no parseable integers.
    #[error("no integers found in custom input")]
    NoValues,

    /// A recorded run must hold at least one step.
    #[error("a run must contain at least one step")]
    EmptyRun,
}
