//! The shared amortized-growth buffer builder.
//!
//! Every constructor that ingests a priori-unbounded input (a fixed literal,
//! a reader drained to end-of-input, a reader drained to a line break) funnels
//! through [`StrandBuilder`], so the capacity-doubling discipline exists in
//! exactly one place. The builder owns its partial buffer, so an aborted
//! build frees what was accumulated instead of leaking it.

use alloc::vec::Vec;

use crate::{
    error::BuildError,
    handle::Strand,
    options::BuilderOptions,
};

/// Accumulates bytes of unknown final count into a minimally-sized [`Strand`].
///
/// Starts at [`BuilderOptions::initial_capacity`] (default 256) and doubles
/// the reservation whenever the next append would take the slot reserved for
/// the terminator; appends are amortized O(1). [`finish`](Self::finish)
/// appends the terminator and shrinks the allocation to exactly `len + 1`.
///
/// # Examples
///
/// ```rust
/// use strand::StrandBuilder;
///
/// let mut builder = StrandBuilder::new()?;
/// for byte in *b"abc" {
///     builder.push(byte)?;
/// }
/// let strand = builder.finish()?;
/// assert_eq!(strand.as_bytes(), b"abc");
/// assert_eq!(strand.as_bytes_with_nul(), b"abc\0");
/// # Ok::<(), strand::BuildError>(())
/// ```
#[derive(Debug)]
pub struct StrandBuilder {
    buf: Vec<u8>,
    /// Current reservation target. Invariant: `buf.len() < limit` and
    /// `buf.capacity() >= limit`, so the terminator slot is always free.
    limit: usize,
}

impl StrandBuilder {
    /// A builder with the default initial reservation.
    pub fn new() -> Result<Self, BuildError> {
        Self::with_options(BuilderOptions::default())
    }

    /// A builder with an explicit initial reservation.
    pub fn with_options(options: BuilderOptions) -> Result<Self, BuildError> {
        let limit = options.initial_capacity.max(2);
        let mut buf = Vec::new();
        buf.try_reserve_exact(limit)?;
        Ok(Self { buf, limit })
    }

    /// Appends one byte, doubling the reservation when the append fills the
    /// last slot before the terminator's.
    pub fn push(&mut self, byte: u8) -> Result<(), BuildError> {
        self.buf.push(byte);
        if self.buf.len() == self.limit - 1 {
            self.limit <<= 1;
            let additional = self.limit - self.buf.len();
            self.buf.try_reserve_exact(additional)?;
        }
        Ok(())
    }

    /// Appends a run of bytes through the same growth discipline.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), BuildError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Bytes accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends the terminator and shrink-reallocates to exactly `len + 1`.
    ///
    /// An empty build yields a valid empty strand.
    pub fn finish(mut self) -> Result<Strand, BuildError> {
        // The growth invariant guarantees a free slot here.
        self.buf.push(0);
        Ok(Strand::from_terminated(self.buf.into_boxed_slice()))
    }
}

/// Builds a strand from a fixed byte source.
pub(crate) fn build_from_literal(bytes: &[u8]) -> Result<Strand, BuildError> {
    let mut builder = StrandBuilder::new()?;
    builder.extend_from_slice(bytes)?;
    builder.finish()
}

/// How far a stream read runs before the build completes.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadUntil {
    /// Drain the source to end-of-input.
    End,
    /// Stop at the first line feed. The delimiter is consumed but not
    /// stored; end-of-input before any line feed also completes the build.
    LineBreak,
}

/// Builds a strand by draining `reader` one byte at a time.
#[cfg(feature = "std")]
pub(crate) fn build_from_reader<R: std::io::Read>(
    mut reader: R,
    until: ReadUntil,
) -> Result<Strand, BuildError> {
    let mut builder = StrandBuilder::new()?;
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                if until == ReadUntil::LineBreak && byte[0] == b'\n' {
                    break;
                }
                builder.push(byte[0])?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(BuildError::Io(e)),
        }
    }
    builder.finish()
}
