//! Dynamic, length-tracked byte strings with an explicit absent value.
//!
//! A [`Strand`] is a heap-resident byte string that knows its own length and
//! keeps a single trailing `0u8` in its allocation for zero-copy handoff to
//! terminator-based APIs. A [`Handle`] is the caller-facing value: either a
//! live strand or the "not a strand" sentinel. Fallible constructors report
//! failure by returning the sentinel; derived constructors absorb sentinel
//! operands into sentinel results.

#![no_std]
#![allow(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod builder;
mod classify;
mod compare;
mod convert;
mod error;
mod handle;
mod options;
#[cfg(feature = "std")]
mod output;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use builder::ReadUntil;
pub use builder::StrandBuilder;
pub use classify::{ByteClass, FloatState, IntState};
pub use error::BuildError;
pub use handle::{Handle, Strand, sentinel_array};
pub use options::BuilderOptions;

/// Macro to build a [`Handle`] from anything that views as bytes.
///
/// ```rust
/// # use strand::strand;
/// let s = strand!("abc");
/// assert!(!s.is_nas());
/// assert_eq!(s.byte_at(0), Some(b'a'));
/// ```
#[macro_export]
macro_rules! strand {
    ($bytes:expr) => {
        $crate::Handle::from_literal($bytes)
    };
}
