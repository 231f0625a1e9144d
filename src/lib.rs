//! Example instrument-support module: a naive prime-number generator and a
//! unit-aware rectangle-area function, exercised by the `hermes-instrument`
//! binary.
//!
//! The two components are independent leaves. [`primes`](crate::primes) finds
//! the first N primes by trial division; [`quantity`](crate::quantity) models
//! unit-tagged magnitudes and multiplies two lengths into an area. Everything
//! is synchronous, deterministic, and free of shared state across calls.

pub mod errors;
pub mod primes;
pub mod quantity;

pub use errors::{Error, Result};
pub use primes::{do_primes, primes, MAX_PRIME_COUNT};
pub use quantity::{area_of_rectangle, Dimension, Quantity, Unit};
