//! # Prime Finder — Trial-Division Prime Generation
//!
//! Generates the first N primes by trial division: each candidate, starting
//! from 2, is tested against every prime already collected, and accepted when
//! none divides it. Complexity is O(N²/ln N) divisions, which is entirely
//! adequate for the documented ceiling of 10000 primes (the 10000th prime is
//! 104729) and keeps the algorithm readable.
//!
//! Two entry points:
//!
//! 1. [`primes`] — the pure generator.
//! 2. [`do_primes`] — dispatch wrapper selecting between the pure generator
//!    and an accelerated variant. No accelerated variant is built into this
//!    crate, so requesting it always fails with
//!    [`Error::AcceleratedUnavailable`](crate::Error::AcceleratedUnavailable).
//!
//! ## References
//!
//! - OEIS A000040: the prime numbers.
//! - OEIS A000720: pi(n), the prime counting function.

use tracing::info;

use crate::errors::{Error, Result};

/// Maximum number of primes a single call may request.
///
/// Inherited contract: requests above this ceiling fail with
/// [`Error::CountExceedsLimit`] and no partial result.
pub const MAX_PRIME_COUNT: usize = 10_000;

/// Generate the first `count` primes in increasing order.
///
/// Returns exactly `count` primes. Deterministic and side-effect free:
/// two calls with the same `count` yield identical sequences.
///
/// # Errors
///
/// [`Error::CountExceedsLimit`] when `count` exceeds [`MAX_PRIME_COUNT`].
///
/// # Examples
///
/// ```
/// use hermes_instrument::primes::primes;
///
/// assert_eq!(primes(10).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub fn primes(count: usize) -> Result<Vec<u64>> {
    if count > MAX_PRIME_COUNT {
        return Err(Error::CountExceedsLimit {
            requested: count,
            limit: MAX_PRIME_COUNT,
        });
    }

    let mut found: Vec<u64> = Vec::with_capacity(count);
    let mut candidate: u64 = 2;
    while found.len() < count {
        if found.iter().all(|&p| candidate % p != 0) {
            found.push(candidate);
        }
        candidate += 1;
    }
    Ok(found)
}

/// Generate the first `count` primes, optionally via the accelerated path.
///
/// With `accelerated = false`, logs which implementation ran and delegates to
/// [`primes`]. With `accelerated = true`, fails immediately: this crate does
/// not ship the accelerated generator.
///
/// # Errors
///
/// [`Error::AcceleratedUnavailable`] when `accelerated` is set;
/// otherwise whatever [`primes`] returns.
pub fn do_primes(count: usize, accelerated: bool) -> Result<Vec<u64>> {
    if accelerated {
        return Err(Error::AcceleratedUnavailable);
    }
    info!(count, "using the pure Rust prime generator");
    primes(count)
}
