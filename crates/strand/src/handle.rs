//! The owned buffer and its caller-facing handle.
//!
//! Ownership discipline
//! - A buffer has exactly one owner. [`Handle`] does not implement `Clone`,
//!   so duplication is impossible by construction; [`Handle::duplicate`] is
//!   the explicit deep copy and [`Handle::take`] is the explicit transfer.
//! - Absence is a variant, not a reserved bit pattern. Every operation that
//!   would have to dereference a missing buffer either absorbs the sentinel
//!   into its result (derived constructors) or reports "no value"
//!   (comparators, accessors).

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::builder;

/// A live, heap-resident byte string.
///
/// Storage is exactly `len + 1` bytes: the meaningful payload followed by a
/// single `0u8` terminator for zero-copy handoff to terminator-based APIs.
/// The length never counts the terminator.
#[derive(PartialEq, Eq)]
pub struct Strand {
    bytes: Box<[u8]>,
    len: usize,
}

impl Strand {
    /// Wraps a finished allocation. `bytes` must be the payload plus one
    /// trailing `0u8`, with no spare capacity.
    pub(crate) fn from_terminated(bytes: Box<[u8]>) -> Self {
        debug_assert!(bytes.last() == Some(&0));
        let len = bytes.len() - 1;
        Self { bytes, len }
    }

    /// Number of meaningful bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The meaningful bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The full allocation: payload plus the trailing terminator byte.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Strand")
            .field(&BStr::new(self.as_bytes()))
            .finish()
    }
}

/// The single caller-facing handle: either a live [`Strand`] or the
/// "not a strand" sentinel.
///
/// A handle is born as the sentinel ([`Handle::new`]) or as the output of a
/// constructor. Dropping a live handle frees its buffer; [`Handle::release`]
/// frees it early and leaves the sentinel behind, and is a no-op on a handle
/// that is already the sentinel.
///
/// Equality is [`Handle::identical`]: two sentinels are equal, a sentinel
/// never equals a live strand (not even an empty one), and live strands
/// compare byte for byte.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Handle(Option<Strand>);

impl Handle {
    /// The sentinel. Every handle must start life as this value.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    pub(crate) fn live(strand: Strand) -> Self {
        Self(Some(strand))
    }

    /// A valid zero-length strand, distinct from the sentinel.
    ///
    /// Returns the sentinel only if the one-byte allocation fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_literal([])
    }

    /// Builds a strand from a fixed byte source.
    ///
    /// An empty source yields a valid empty strand, not the sentinel.
    /// Allocation failure yields the sentinel.
    #[must_use]
    pub fn from_literal(bytes: impl AsRef<[u8]>) -> Self {
        builder::build_from_literal(bytes.as_ref()).map_or_else(|_| Self::new(), Self::live)
    }

    /// Builds a strand by draining `reader` one byte at a time.
    ///
    /// With [`ReadUntil::LineBreak`](crate::ReadUntil::LineBreak) the first
    /// line feed ends the build; the delimiter is consumed but not stored.
    /// An immediately exhausted reader yields a valid empty strand. Read or
    /// allocation failure yields the sentinel.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_reader<R: std::io::Read>(reader: R, until: builder::ReadUntil) -> Self {
        builder::build_from_reader(reader, until).map_or_else(|_| Self::new(), Self::live)
    }

    /// Frees the owned buffer (if any) and leaves the sentinel. Idempotent.
    pub fn release(&mut self) {
        self.0 = None;
    }

    /// Transfers ownership of the buffer out of `self`, leaving the sentinel
    /// behind. O(1); no bytes are copied.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// True iff this handle owns no buffer.
    #[must_use]
    pub fn is_nas(&self) -> bool {
        self.0.is_none()
    }

    /// True iff this handle owns a live zero-length strand. The sentinel is
    /// not empty; it is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_some_and(Strand::is_empty)
    }

    /// Borrows the live strand, if any.
    #[must_use]
    pub fn as_strand(&self) -> Option<&Strand> {
        self.0.as_ref()
    }

    /// Deep copy: an independent allocation with identical content.
    ///
    /// Sentinel in, sentinel out; allocation failure also yields the
    /// sentinel.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let Some(src) = self.as_strand() else {
            return Self::new();
        };
        copy_into_strand(&[src.as_bytes()]).map_or_else(|()| Self::new(), Self::live)
    }

    /// Concatenation: the bytes of `self` followed by the bytes of `other`.
    ///
    /// Sentinel on either side absorbs into a sentinel result. Two empty
    /// operands yield a fresh valid empty strand, never an alias of either
    /// operand. Allocation failure yields the sentinel.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let (Some(a), Some(b)) = (self.as_strand(), other.as_strand()) else {
            return Self::new();
        };
        copy_into_strand(&[a.as_bytes(), b.as_bytes()]).map_or_else(|()| Self::new(), Self::live)
    }

    /// A byte-reversed copy. Sentinel absorbs; an empty strand yields a
    /// fresh empty strand; allocation failure yields the sentinel.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let Some(s) = self.as_strand() else {
            return Self::new();
        };
        let src = s.as_bytes();
        let mut buf = Vec::new();
        if buf.try_reserve_exact(src.len() + 1).is_err() {
            return Self::new();
        }
        buf.extend(src.iter().rev().copied());
        buf.push(0);
        Self::live(Strand::from_terminated(buf.into_boxed_slice()))
    }
}

impl From<Strand> for Handle {
    /// Adopts a freshly constructed strand; the handle becomes its sole
    /// owner.
    fn from(strand: Strand) -> Self {
        Self(Some(strand))
    }
}

/// Allocates exactly the combined length plus the terminator and copies the
/// parts in order. `Err(())` means the reservation failed.
fn copy_into_strand(parts: &[&[u8]]) -> Result<Strand, ()> {
    let total: usize = parts.iter().map(|p| p.len()).sum();
    let mut buf = Vec::new();
    buf.try_reserve_exact(total + 1).map_err(|_| ())?;
    for part in parts {
        buf.extend_from_slice(part);
    }
    buf.push(0);
    Ok(Strand::from_terminated(buf.into_boxed_slice()))
}

/// A runtime array of handles, every element the sentinel.
///
/// Returns an empty vector when `size` is zero or the reservation fails.
#[must_use]
pub fn sentinel_array(size: usize) -> Vec<Handle> {
    let mut handles = Vec::new();
    if handles.try_reserve_exact(size).is_err() {
        return Vec::new();
    }
    handles.resize_with(size, Handle::new);
    handles
}
