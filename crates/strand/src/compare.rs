//! Ordering and equality over live strands.

use core::cmp::Ordering;

use crate::handle::Handle;

impl Handle {
    /// Lexicographic three-way comparison.
    ///
    /// Byte-by-byte over the common prefix; on the first mismatch the
    /// numerically smaller byte orders first, and with no mismatch the
    /// shorter strand orders first. Returns `None` when either side is the
    /// sentinel: an absent value has no defined order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        let a = self.as_strand()?.as_bytes();
        let b = other.as_strand()?.as_bytes();
        for (x, y) in a.iter().zip(b) {
            match x.cmp(y) {
                Ordering::Equal => {}
                unequal => return Some(unequal),
            }
        }
        Some(a.len().cmp(&b.len()))
    }

    /// Exact byte-for-byte equality, with a defined sentinel policy: two
    /// sentinels are identical, and a sentinel is never identical to a live
    /// strand, not even an empty one. Same relation as `==`.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        self == other
    }
}
