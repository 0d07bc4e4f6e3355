use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::ops::{Index, IndexMut};

/// One row of the sketch: a prime-length array of optional timestamps.
pub(crate) struct LastSeenRow<T>(Vec<Option<T>>);

impl<T: Copy> LastSeenRow<T> {
    pub(crate) fn new(modulus: u16) -> Self {
        Self(vec![None; modulus as usize])
    }

    /// Occupied slots, in slot order.
    pub(crate) fn timestamps(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().filter_map(|t| *t)
    }
}

impl<T> LastSeenRow<T> {
    pub(crate) fn modulus(&self) -> u16 {
        self.0.len() as u16
    }

    /// Index of the slot `key` maps to in this row.
    pub(crate) fn slot(&self, key: u64) -> usize {
        (key % self.0.len() as u64) as usize
    }
}

impl<T> Index<usize> for LastSeenRow<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl<T> IndexMut<usize> for LastSeenRow<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.index_mut(index)
    }
}

impl<T: Debug> Debug for LastSeenRow<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for t in self.0.iter().flatten() {
            write!(f, " {:?}", t)?;
        }
        write!(f, " ]")
    }
}
