//! This mod implements the prime generator used to size the sketch rows.
//!
//! Every prime is enumerated within `[0, 65535]`, so that a row modulus
//! always fits in a `u16`.
use alloc::vec::Vec;
use bitvec::prelude::{bitvec, BitVec, Lsb0};

/// Number of values in the prime domain, `0..=u16::MAX`.
const DOMAIN: usize = 1 << 16;

/// `PrimeSieve` is a sieve of Eratosthenes over the whole `u16` domain.
///
/// Building one costs 8 KiB and a single sieving pass, after which any
/// number of [`primes_from`] queries can be answered from it.
///
/// [`primes_from`]: struct.PrimeSieve.html#method.primes_from
pub struct PrimeSieve {
    bits: BitVec<u64, Lsb0>,
}

impl PrimeSieve {
    /// Sieve the whole `u16` domain.
    pub fn new() -> Self {
        let mut bits = bitvec![u64, Lsb0; 1; DOMAIN];
        bits.set(0, false);
        bits.set(1, false);

        let mut p = 2;
        while p * p < DOMAIN {
            if bits[p] {
                let mut multiple = p * p;
                while multiple < DOMAIN {
                    bits.set(multiple, false);
                    multiple += p;
                }
            }
            p += 1;
        }

        Self { bits }
    }

    /// Returns true if `n` is prime.
    pub fn is_prime(&self, n: u16) -> bool {
        self.bits[n as usize]
    }

    /// Returns at most `count` primes `>= floor` in increasing order.
    ///
    /// The result is shorter than `count` when the domain runs out of primes,
    /// and empty when there are none at or above `floor`.
    pub fn primes_from(&self, floor: u16, count: usize) -> Vec<u16> {
        let floor = floor as usize;
        self.bits[floor..]
            .iter_ones()
            .take(count)
            .map(|offset| (floor + offset) as u16)
            .collect()
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns at most `count` primes `>= floor` in increasing order, see
/// [`PrimeSieve::primes_from`].
///
/// [`PrimeSieve::primes_from`]: struct.PrimeSieve.html#method.primes_from
pub fn primes_from(floor: u16, count: usize) -> Vec<u16> {
    PrimeSieve::new().primes_from(floor, count)
}
