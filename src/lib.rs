//! A last-seen sketch: a fixed-size structure recording an approximate
//! most-recent update time for each of an unbounded set of `u64` keys.
//!
//! Lookups never miss a key that was updated, and report a key that was not
//! with a probability of about 1% when the sketch is filled to its capacity.
//!
//! Construction is the only fallible step: see [`LastSeenSketch::new`].
//!
//! ## Features
//! - `std` (default): implements `std::error::Error` for [`LastSeenError`].
//! - `hashbrown`: use `hashbrown::HashMap` in [`LastSeenSketch::count_distinct`].
//!
//! [`LastSeenSketch::new`]: struct.LastSeenSketch.html#method.new
//! [`LastSeenSketch::count_distinct`]: struct.LastSeenSketch.html#method.count_distinct
//! [`LastSeenError`]: enum.LastSeenError.html
#![no_std]
#![deny(missing_docs)]
extern crate alloc;
#[cfg(feature = "hashbrown")]
extern crate hashbrown;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[macro_use]
mod macros;
mod error;
mod primes;
mod sketch;

pub use error::LastSeenError;
pub use primes::{primes_from, PrimeSieve};
pub use sketch::{LastSeenSketch, DEPTH, MAX_CAPACITY, MULTIPLIER};
