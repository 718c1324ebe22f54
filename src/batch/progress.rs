//! Bounded progress output for large batches.

/// Records shown at each end of a batch.
pub const PROGRESS_EDGE: usize = 5;

/// How one record position appears in progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLine {
    /// Print a line for the record.
    Show,
    /// Print the single ellipsis marker in place of this record.
    Ellipsis,
    /// Print nothing.
    Hidden,
}

/// Decides the progress line for 1-based `position` in a batch of `total`.
///
/// The first and last [`PROGRESS_EDGE`] records are shown; the first hidden
/// record is replaced by one ellipsis marker.
#[must_use]
pub const fn progress_line(position: usize, total: usize) -> ProgressLine {
    if position <= PROGRESS_EDGE || position > total.saturating_sub(PROGRESS_EDGE) {
        ProgressLine::Show
    } else if position == PROGRESS_EDGE + 1 {
        ProgressLine::Ellipsis
    } else {
        ProgressLine::Hidden
    }
}
