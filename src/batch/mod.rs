//! Confirmed, sequential bulk mutation of notification threads.
//!
//! A [`Batch`] moves through `Pending → Confirmed → Executing → Done`, or
//! `Pending → Cancelled` when confirmation is declined. Nothing touches the
//! network before confirmation, and each record is attempted exactly once.

mod mutator;
mod progress;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use mutator::BatchMutator;
pub use progress::{PROGRESS_EDGE, ProgressLine, progress_line};

use crate::github::models::NotificationRecord;

/// Operations applied to every record of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOperations {
    /// Remove the thread subscription.
    Unsubscribe,
    /// Mark the thread as read.
    MarkRead,
    /// Unsubscribe, then mark read when unsubscribing succeeded.
    UnsubscribeAndMarkRead,
}

impl BatchOperations {
    /// Returns true when the subscription is removed.
    #[must_use]
    pub const fn unsubscribe(self) -> bool {
        matches!(self, Self::Unsubscribe | Self::UnsubscribeAndMarkRead)
    }

    /// Returns true when the thread is marked read.
    #[must_use]
    pub const fn mark_read(self) -> bool {
        matches!(self, Self::MarkRead | Self::UnsubscribeAndMarkRead)
    }

    /// Human-readable action names joined with ` + `.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsubscribe => "unsubscribe",
            Self::MarkRead => "mark read",
            Self::UnsubscribeAndMarkRead => "unsubscribe + mark read",
        }
    }
}

/// Lifecycle of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed, not yet started.
    Confirmed,
    /// Records are being processed.
    Executing,
    /// Every record was attempted, or the run stopped on interrupt.
    Done,
    /// Confirmation was declined.
    Cancelled,
}

/// Capability to ask the user a yes/no question.
pub trait Confirm {
    /// Returns true only for an explicit yes.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// One progress event raised while a batch executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent<'a> {
    /// A record is about to be processed (1-based position).
    Record {
        /// Position within the batch.
        position: usize,
        /// Batch size.
        total: usize,
        /// Repository full name of the record.
        repository: &'a str,
    },
    /// Records between the visible head and tail were skipped in output.
    Elided,
}

/// Capability to report batch progress.
pub trait ProgressSink {
    /// Records one progress event.
    fn report(&mut self, event: ProgressEvent<'_>);
}

/// Success tally of an executed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTally {
    /// Records for which every requested operation succeeded.
    pub succeeded: usize,
    /// Records that were attempted.
    pub attempted: usize,
    /// Records in the batch.
    pub total: usize,
}

/// Final outcome of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Confirmation was declined; nothing was sent.
    Cancelled {
        /// Records in the batch.
        total: usize,
    },
    /// Every record was attempted.
    Completed(BatchTally),
    /// An interrupt stopped the run between records.
    Interrupted(BatchTally),
}

impl BatchOutcome {
    /// Returns `(success count, total count)`.
    #[must_use]
    pub const fn counts(&self) -> (usize, usize) {
        match self {
            Self::Cancelled { total } => (0, *total),
            Self::Completed(tally) | Self::Interrupted(tally) => (tally.succeeded, tally.total),
        }
    }
}

/// An ordered set of records sharing one set of operations.
#[derive(Debug, Clone)]
pub struct Batch<'records> {
    records: &'records [NotificationRecord],
    operations: BatchOperations,
    state: BatchState,
}

impl<'records> Batch<'records> {
    /// Creates a pending batch.
    #[must_use]
    pub const fn new(records: &'records [NotificationRecord], operations: BatchOperations) -> Self {
        Self {
            records,
            operations,
            state: BatchState::Pending,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BatchState {
        self.state
    }

    /// Operations applied to each record.
    #[must_use]
    pub const fn operations(&self) -> BatchOperations {
        self.operations
    }

    /// Records in execution order.
    #[must_use]
    pub const fn records(&self) -> &'records [NotificationRecord] {
        self.records
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the batch holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Question put to the user before execution.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "About to {} {} notifications. Proceed? (y/n): ",
            self.operations.label(),
            self.records.len()
        )
    }

    /// Asks for confirmation while pending and records the answer.
    ///
    /// Returns true when the batch is confirmed. Calling this outside the
    /// pending state asks nothing.
    pub fn confirm<C>(&mut self, confirm: &mut C) -> bool
    where
        C: Confirm + ?Sized,
    {
        if self.state == BatchState::Pending {
            self.state = if confirm.confirm(&self.prompt()) {
                BatchState::Confirmed
            } else {
                BatchState::Cancelled
            };
        }
        self.state == BatchState::Confirmed
    }

    const fn transition(&mut self, state: BatchState) {
        self.state = state;
    }
}
