//! Ctrl-C handling for the interactive session.
//!
//! Outside a batch an interrupt ends the program at once. While a batch runs
//! it is deferred: the batch stops at the next record boundary and the
//! session then exits.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Exit status used after an interrupt.
pub const EXIT_INTERRUPTED: u8 = 130;

/// What the signal handler should do with an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Leave the process now.
    Exit,
    /// Let the running batch stop at the next record boundary.
    Deferred,
}

/// Interrupt flags shared between the signal task and the session.
#[derive(Debug, Default)]
pub struct InterruptState {
    requested: Arc<AtomicBool>,
    batch_active: AtomicBool,
}

impl InterruptState {
    /// Flag polled by the batch mutator between records.
    pub fn requested_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.requested)
    }

    /// Returns true once an interrupt was deferred.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Marks the start of batch execution.
    pub fn enter_batch(&self) {
        self.batch_active.store(true, Ordering::SeqCst);
    }

    /// Marks the end of batch execution.
    pub fn leave_batch(&self) {
        self.batch_active.store(false, Ordering::SeqCst);
    }

    /// Records an interrupt and decides how to handle it.
    pub fn on_interrupt(&self) -> InterruptAction {
        if self.batch_active.load(Ordering::SeqCst) {
            self.requested.store(true, Ordering::SeqCst);
            InterruptAction::Deferred
        } else {
            InterruptAction::Exit
        }
    }
}

/// Spawns the task that listens for Ctrl-C.
pub fn install(state: Arc<InterruptState>) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            match state.on_interrupt() {
                InterruptAction::Exit => {
                    let _ignored = writeln!(io::stderr().lock(), "\nExited");
                    std::process::exit(i32::from(EXIT_INTERRUPTED));
                }
                InterruptAction::Deferred => {
                    tracing::info!("interrupt received; stopping after the current notification");
                }
            }
        }
    });
}
