//! This mod implements the last-seen sketch.
//!
//! The sketch keeps [`DEPTH`] rows of timestamps, each with a distinct prime
//! length. A key is reduced to one slot per row with `key % modulus`, and an
//! update writes `now` into all of them. A lookup takes the minimum over the
//! rows, so a key that was updated is never reported as unseen, and a key
//! that was not is reported as seen only when all of its slots were already
//! taken by other keys.
//!
//! [`DEPTH`]: constant.DEPTH.html
mod row;
use row::LastSeenRow;

use crate::error::LastSeenError;
use crate::primes::primes_from;
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt::{Debug, Formatter};
use core::hash::Hash;

import_hash_map!();

/// Number of rows in a sketch.
pub const DEPTH: usize = 7;

/// Ratio between the total number of slots and the capacity, which keeps the
/// false positive rate of lookups around 1%.
pub const MULTIPLIER: usize = 10;

/// The largest capacity [`LastSeenSketch::new`] accepts.
///
/// [`LastSeenSketch::new`]: struct.LastSeenSketch.html#method.new
pub const MAX_CAPACITY: usize = 45805;

/// `LastSeenSketch` records, for an unbounded set of `u64` keys, the latest
/// time each key could have been updated, in constant memory.
///
/// `T` is the caller's clock type: any totally ordered `Copy` value, such as
/// `std::time::Instant` or a tick counter. The sketch never reads a clock on
/// its own.
///
/// The sketch does no locking. [`update`] and [`lookup_and_update`] read and
/// then write every row, so callers sharing a sketch across threads must
/// serialize access themselves, or keep one sketch per worker.
///
/// # Example
/// ```rust
/// use lastseen::LastSeenSketch;
///
/// let mut sketch = LastSeenSketch::<u64>::new(1000).unwrap();
/// assert_eq!(sketch.capacity(), 1011);
///
/// assert!(!sketch.update(42, 1));
/// assert!(sketch.update(42, 2));
/// assert_eq!(sketch.lookup(42), Some(2));
/// assert_eq!(sketch.lookup(43), None);
///
/// assert_eq!(sketch.lookup_and_update(7, 3), None);
/// assert_eq!(sketch.count_distinct(1), 2);
/// ```
///
/// [`update`]: struct.LastSeenSketch.html#method.update
/// [`lookup_and_update`]: struct.LastSeenSketch.html#method.lookup_and_update
pub struct LastSeenSketch<T> {
    rows: [LastSeenRow<T>; DEPTH],
}

impl<T: Copy + Ord> LastSeenSketch<T> {
    /// Create a sketch that holds `capacity` keys with ~1% false positives
    /// on lookups.
    ///
    /// Each row gets its own prime length, starting from
    /// `ceil(capacity * MULTIPLIER / DEPTH)`. Returns
    /// [`LastSeenError::UnsupportedSize`] when `capacity` is zero or larger
    /// than [`MAX_CAPACITY`].
    ///
    /// [`LastSeenError::UnsupportedSize`]: enum.LastSeenError.html#variant.UnsupportedSize
    /// [`MAX_CAPACITY`]: constant.MAX_CAPACITY.html
    pub fn new(capacity: usize) -> Result<Self, LastSeenError> {
        let floor = capacity
            .checked_mul(MULTIPLIER)
            .and_then(|slots| slots.checked_add(DEPTH - 1))
            .map(|slots| slots / DEPTH)
            .filter(|&floor| floor > 0)
            .and_then(|floor| u16::try_from(floor).ok());

        let floor = match floor {
            Some(floor) => floor,
            None => {
                tracing::warn!(capacity, "last-seen sketch row size out of range");
                return Err(LastSeenError::UnsupportedSize(capacity));
            }
        };

        let rows: Vec<LastSeenRow<T>> = primes_from(floor, DEPTH)
            .into_iter()
            .map(LastSeenRow::new)
            .collect();

        match <[LastSeenRow<T>; DEPTH]>::try_from(rows) {
            Ok(rows) => {
                let this = Self { rows };
                tracing::debug!(
                    capacity,
                    floor,
                    moduli = ?this.moduli(),
                    "created last-seen sketch"
                );
                Ok(this)
            }
            Err(rows) => {
                tracing::warn!(
                    capacity,
                    floor,
                    primes = rows.len(),
                    "not enough primes for last-seen sketch rows"
                );
                Err(LastSeenError::UnsupportedSize(capacity))
            }
        }
    }

    /// Set the timestamp of `key` to `now` in every row.
    ///
    /// Returns true if the key was seen before. A key is new as soon as one
    /// of its slots is empty.
    pub fn update(&mut self, key: u64, now: T) -> bool {
        let mut present = true;
        self.rows.iter_mut().for_each(|row| {
            let idx = row.slot(key);
            if row[idx].is_none() {
                present = false;
            }
            row[idx] = Some(now);
        });
        present
    }

    /// `lookup` returns the latest time `key` could have been updated, or
    /// `None` if it has never been updated.
    pub fn lookup(&self, key: u64) -> Option<T> {
        let mut last_seen: Option<T> = None;
        for row in self.rows.iter() {
            let t = row[row.slot(key)]?;
            last_seen = Some(last_seen.map_or(t, |seen| seen.min(t)));
        }
        last_seen
    }

    /// `contains` returns true if `key` could have been updated.
    pub fn contains(&self, key: u64) -> bool {
        self.lookup(key).is_some()
    }

    /// `lookup_and_update` returns what [`lookup`] would have returned for
    /// `key`, and sets its timestamp to `now`, in a single pass over the rows.
    ///
    /// [`lookup`]: struct.LastSeenSketch.html#method.lookup
    pub fn lookup_and_update(&mut self, key: u64, now: T) -> Option<T> {
        let mut present = true;
        let mut last_seen: Option<T> = None;
        self.rows.iter_mut().for_each(|row| {
            let idx = row.slot(key);
            match row[idx] {
                Some(t) => last_seen = Some(last_seen.map_or(t, |seen| seen.min(t))),
                None => present = false,
            }
            row[idx] = Some(now);
        });

        if present {
            last_seen
        } else {
            None
        }
    }

    /// Returns the maximum number of distinct keys the sketch holds with
    /// ~1% false positives.
    pub fn capacity(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.modulus() as usize)
            .sum::<usize>()
            / MULTIPLIER
    }

    /// Returns the length of every row, in increasing order.
    pub fn moduli(&self) -> [u16; DEPTH] {
        let mut moduli = [0; DEPTH];
        moduli
            .iter_mut()
            .zip(self.rows.iter())
            .for_each(|(m, row)| *m = row.modulus());
        moduli
    }
}

impl<T: Copy + Ord + Hash> LastSeenSketch<T> {
    /// Estimates the number of distinct keys last updated strictly after
    /// `since`.
    ///
    /// Every row counts its slots per timestamp. Overwrites by other keys can
    /// only lower a row's count for a timestamp, so each timestamp takes the
    /// largest count seen in any row, and the estimate is the sum over all
    /// timestamps after `since`.
    pub fn count_distinct(&self, since: T) -> usize {
        let mut unique_timestamps: HashMap<T, usize> = HashMap::new();

        self.rows.iter().for_each(|row| {
            let mut row_counts: HashMap<T, usize> = HashMap::new();
            row.timestamps()
                .filter(|t| *t > since)
                .for_each(|t| *row_counts.entry(t).or_insert(0) += 1);

            row_counts.into_iter().for_each(|(t, count)| {
                let best = unique_timestamps.entry(t).or_insert(0);
                if count > *best {
                    *best = count;
                }
            });
        });

        unique_timestamps.values().sum()
    }
}

impl<T: Debug> Debug for LastSeenSketch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "Modulus {}: {:?}", row.modulus(), row)?;
        }
        Ok(())
    }
}
