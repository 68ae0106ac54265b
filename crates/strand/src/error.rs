use alloc::collections::TryReserveError;

use thiserror::Error;

/// Why a build could not produce a live strand.
///
/// Public constructors on [`Handle`](crate::Handle) absorb this into the
/// sentinel; [`StrandBuilder`](crate::StrandBuilder) surfaces it so callers
/// that build incrementally can observe the cause.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The allocator refused to reserve or grow the buffer.
    #[error("buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
    /// The byte source failed mid-read.
    #[cfg(feature = "std")]
    #[error("read from byte source failed: {0}")]
    Io(#[from] std::io::Error),
}
