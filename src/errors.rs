//! Error types shared by the prime generator and the quantity model.
//!
//! Every error here is fail-fast: the operation that raised it returns no
//! partial result, and callers are expected to propagate with `?` rather
//! than recover.

use thiserror::Error;

use crate::quantity::{Dimension, Unit};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested prime count exceeds the documented input ceiling.
    ///
    /// The message wording ("count should be <= 10000") is part of the
    /// external contract and is matched by the CLI tests.
    #[error("count should be <= {limit} (got {requested})")]
    CountExceedsLimit {
        /// The count the caller asked for.
        requested: usize,
        /// The ceiling it violated.
        limit: usize,
    },

    /// The accelerated prime generator was requested, but this crate does not
    /// ship one.
    #[error("the accelerated prime generator is not included in this build")]
    AcceleratedUnavailable,

    /// A quantity carried a unit of the wrong physical dimension.
    #[error("unit mismatch for {context}: expected {expected:?}, got {unit:?} ({found:?})")]
    UnitMismatch {
        /// What the quantity was used as ("width", "height", "conversion target").
        context: &'static str,
        /// The dimension the operation requires.
        expected: Dimension,
        /// The dimension actually supplied.
        found: Dimension,
        /// The offending unit.
        unit: Unit,
    },
}

impl Error {
    /// Build a [`Error::UnitMismatch`] for a unit used where `expected` was required.
    pub(crate) fn unit_mismatch(context: &'static str, expected: Dimension, unit: Unit) -> Self {
        Error::UnitMismatch {
            context,
            expected,
            found: unit.dimension(),
            unit,
        }
    }
}
