//! Sequential executor for confirmed batches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::github::gateway::NotificationGateway;
use crate::github::models::NotificationRecord;
use crate::inbox::NotificationSource;

use super::progress::{ProgressLine, progress_line};
use super::{
    Batch, BatchOperations, BatchOutcome, BatchState, BatchTally, Confirm, ProgressEvent,
    ProgressSink,
};

/// Applies batches through a [`NotificationSource`], one record at a time.
pub struct BatchMutator<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    source: NotificationSource<'client, Gateway>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl<'client, Gateway> BatchMutator<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Creates a mutator that runs every batch to completion.
    #[must_use]
    pub const fn new(source: NotificationSource<'client, Gateway>) -> Self {
        Self {
            source,
            interrupt: None,
        }
    }

    /// Stops batches at the next record boundary once `flag` is set.
    #[must_use]
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Confirms and executes `records` under `operations`.
    ///
    /// An empty list completes immediately without asking.
    pub async fn run<C, P>(
        &self,
        records: &[NotificationRecord],
        operations: BatchOperations,
        confirm: &mut C,
        progress: &mut P,
    ) -> BatchOutcome
    where
        C: Confirm + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let mut batch = Batch::new(records, operations);
        if !batch.is_empty() {
            batch.confirm(confirm);
        }
        self.execute(&mut batch, progress).await
    }

    /// Executes a batch that has been confirmed.
    ///
    /// Empty batches complete with a zero tally. Any other batch that is not
    /// in the confirmed state is reported as cancelled and left untouched.
    pub async fn execute<P>(&self, batch: &mut Batch<'_>, progress: &mut P) -> BatchOutcome
    where
        P: ProgressSink + ?Sized,
    {
        let total = batch.len();
        if batch.is_empty() {
            batch.transition(BatchState::Done);
            return BatchOutcome::Completed(BatchTally {
                succeeded: 0,
                attempted: 0,
                total,
            });
        }
        if batch.state() != BatchState::Confirmed {
            tracing::info!(total, "batch cancelled before execution");
            return BatchOutcome::Cancelled { total };
        }

        batch.transition(BatchState::Executing);
        let mut tally = BatchTally {
            succeeded: 0,
            attempted: 0,
            total,
        };

        for (index, record) in batch.records().iter().enumerate() {
            if self.interrupted() {
                batch.transition(BatchState::Done);
                tracing::info!(
                    succeeded = tally.succeeded,
                    attempted = tally.attempted,
                    total,
                    "batch interrupted"
                );
                return BatchOutcome::Interrupted(tally);
            }

            let position = index + 1;
            match progress_line(position, total) {
                ProgressLine::Show => progress.report(ProgressEvent::Record {
                    position,
                    total,
                    repository: &record.repository_full_name,
                }),
                ProgressLine::Ellipsis => progress.report(ProgressEvent::Elided),
                ProgressLine::Hidden => {}
            }

            tally.attempted += 1;
            if self.apply(batch.operations(), record).await {
                tally.succeeded += 1;
            }
        }

        batch.transition(BatchState::Done);
        tracing::info!(succeeded = tally.succeeded, total, "batch finished");
        BatchOutcome::Completed(tally)
    }

    /// Runs the requested operations for one record.
    ///
    /// A failed unsubscribe skips marking the thread read so it stays
    /// discoverable in the inbox.
    async fn apply(&self, operations: BatchOperations, record: &NotificationRecord) -> bool {
        if operations.unsubscribe() && !self.source.unsubscribe(&record.id).await {
            return false;
        }
        if operations.mark_read() {
            return self.source.mark_read(&record.id).await;
        }
        true
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
#[path = "mutator_tests.rs"]
mod tests;
