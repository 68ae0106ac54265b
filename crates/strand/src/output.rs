//! Raw byte emission for live strands.

use std::io::{self, Write};

use crate::handle::Handle;

impl Handle {
    /// Writes the meaningful bytes, without the terminator.
    ///
    /// The sentinel writes nothing, and so does a valid empty strand; an
    /// empty value is empty output, not a placeholder token.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.as_strand() {
            Some(s) => writer.write_all(s.as_bytes()),
            None => Ok(()),
        }
    }

    /// [`write_to`](Self::write_to) followed by a single line feed. The
    /// line feed is written even for the sentinel.
    pub fn write_line_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.write_to(writer)?;
        writer.write_all(b"\n")
    }
}
