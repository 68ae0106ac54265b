/// Configuration options for [`StrandBuilder`](crate::StrandBuilder).
///
/// # Examples
///
/// ```rust
/// use strand::{BuilderOptions, StrandBuilder};
///
/// let builder = StrandBuilder::with_options(BuilderOptions {
///     initial_capacity: 16,
/// })
/// .unwrap();
/// assert!(builder.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Initial byte reservation, including the slot the terminator will
    /// occupy when the build finishes.
    ///
    /// Values below 2 are raised to 2 so the terminator slot always exists.
    ///
    /// # Default
    ///
    /// `256`
    pub initial_capacity: usize,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}
