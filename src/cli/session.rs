//! Interactive menu loop over one authenticated session.

use std::io::{BufRead, Write};
use std::sync::Arc;

use quieten::{
    Batch, BatchMutator, BatchOperations, BatchOutcome, Confirm, InboxError, NotificationGateway,
    NotificationRecord, NotificationSource, TelemetryEvent, TelemetrySink, aggregate,
    filter_by_group, summary_report,
};

use super::console::Console;
use super::signal::InterruptState;

const MENU: &str = "\
==============================
1. Show statistics
2. Manage an organisation
3. Unsubscribe from all
4. Mark all as read
5. Exit";

const GROUP_ACTIONS: &str = "
1. Unsubscribe + mark read
2. Unsubscribe only
3. Mark read only";

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose to exit or closed the input.
    Exit,
    /// A batch stopped on Ctrl-C.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Statistics,
    ManageGroup,
    UnsubscribeAll,
    MarkAllRead,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Statistics),
            "2" => Some(Self::ManageGroup),
            "3" => Some(Self::UnsubscribeAll),
            "4" => Some(Self::MarkAllRead),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu-driven session state.
pub struct Session<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    source: NotificationSource<'client, Gateway>,
    mutator: BatchMutator<'client, Gateway>,
    include_read: bool,
    telemetry: &'client dyn TelemetrySink,
    interrupt: Arc<InterruptState>,
}

impl<'client, Gateway> Session<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Creates a session over `gateway`.
    pub fn new(
        gateway: &'client Gateway,
        include_read: bool,
        telemetry: &'client dyn TelemetrySink,
        interrupt: Arc<InterruptState>,
    ) -> Self {
        let source = NotificationSource::new(gateway);
        Self {
            source,
            mutator: BatchMutator::new(source).with_interrupt(interrupt.requested_flag()),
            include_read,
            telemetry,
            interrupt,
        }
    }

    /// Runs the menu until the user exits, input ends, or a batch is
    /// interrupted.
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> Result<SessionEnd, InboxError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            console.line("")?;
            console.line(MENU)?;
            let Some(raw) = console.ask("Choose: ")? else {
                return Ok(SessionEnd::Exit);
            };
            let Some(choice) = MenuChoice::parse(&raw) else {
                console.line("Unknown option")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                return Ok(SessionEnd::Exit);
            }

            let records = self.sync(console).await?;
            if records.is_empty() && choice != MenuChoice::Statistics {
                console.line("No notifications")?;
                continue;
            }

            let end = match choice {
                MenuChoice::Statistics => {
                    console.block(&summary_report(&aggregate(&records)))?;
                    None
                }
                MenuChoice::ManageGroup => self.manage_group(console, &records).await?,
                MenuChoice::UnsubscribeAll => {
                    console.line("Warning: this unsubscribes from every notification")?;
                    self.run_batch(console, &records, BatchOperations::Unsubscribe)
                        .await?
                }
                MenuChoice::MarkAllRead => {
                    self.mark_all_read(console).await?;
                    None
                }
                MenuChoice::Exit => Some(SessionEnd::Exit),
            };

            if let Some(end) = end {
                return Ok(end);
            }
        }
    }

    async fn sync<R, W>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<NotificationRecord>, InboxError>
    where
        R: BufRead,
        W: Write,
    {
        console.block("Fetching notifications")?;
        let report = self
            .source
            .fetch_all_observed(self.include_read, console)
            .await;
        self.telemetry.record(TelemetryEvent::NotificationsFetched {
            count: report.records.len(),
            pages: report.pages_requested,
            complete: report.is_complete(),
        });
        Ok(report.records)
    }

    async fn manage_group<R, W>(
        &self,
        console: &mut Console<R, W>,
        records: &[NotificationRecord],
    ) -> Result<Option<SessionEnd>, InboxError>
    where
        R: BufRead,
        W: Write,
    {
        console.block(&summary_report(&aggregate(records)))?;
        let Some(owner) = console.ask("\nOrganisation: ")? else {
            return Ok(None);
        };
        if owner.is_empty() {
            return Ok(None);
        }

        let selected = filter_by_group(records, &owner);
        if selected.is_empty() {
            console.line("No notifications found for that organisation")?;
            return Ok(None);
        }

        console.line(GROUP_ACTIONS)?;
        let operations = match console.ask("Action: ")?.as_deref() {
            Some("1") => BatchOperations::UnsubscribeAndMarkRead,
            Some("2") => BatchOperations::Unsubscribe,
            Some("3") => BatchOperations::MarkRead,
            _ => return Ok(None),
        };

        self.run_batch(console, &selected, operations).await
    }

    async fn run_batch<R, W>(
        &self,
        console: &mut Console<R, W>,
        records: &[NotificationRecord],
        operations: BatchOperations,
    ) -> Result<Option<SessionEnd>, InboxError>
    where
        R: BufRead,
        W: Write,
    {
        let mut batch = Batch::new(records, operations);
        if batch.is_empty() {
            return Ok(None);
        }

        console.line("")?;
        if !batch.confirm(console) {
            console.line("Cancelled")?;
            return Ok(None);
        }

        self.interrupt.enter_batch();
        let outcome = self.mutator.execute(&mut batch, console).await;
        self.interrupt.leave_batch();

        let (succeeded, total) = outcome.counts();
        self.telemetry.record(TelemetryEvent::BatchFinished {
            succeeded,
            total,
            interrupted: matches!(outcome, BatchOutcome::Interrupted(_)),
        });

        match outcome {
            BatchOutcome::Completed(_) => {
                console.line(&format!("\nDone: {succeeded}/{total} succeeded"))?;
                if self.interrupt.is_requested() {
                    return Ok(Some(SessionEnd::Interrupted));
                }
                Ok(None)
            }
            BatchOutcome::Interrupted(tally) => {
                console.line(&format!(
                    "\nInterrupted after {}/{total} notifications: {succeeded} succeeded",
                    tally.attempted
                ))?;
                Ok(Some(SessionEnd::Interrupted))
            }
            BatchOutcome::Cancelled { .. } => {
                console.line("Cancelled")?;
                Ok(None)
            }
        }
    }

    async fn mark_all_read<R, W>(&self, console: &mut Console<R, W>) -> Result<(), InboxError>
    where
        R: BufRead,
        W: Write,
    {
        if !console.confirm("Mark all notifications as read? (y/n): ") {
            return console.line("Cancelled");
        }
        if self.source.mark_all_read().await {
            console.line("Marked all notifications as read")
        } else {
            console.line("Mark all as read failed")
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
