//! Support modules for the notification inbox BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{NotificationCount, Owner, PageCount, ThreadNumber};
pub(crate) use harness::{mount_failing_page, mount_inbox, mount_mutations, mutation_requests};
pub(crate) use state::{InboxState, ensure_runtime_and_server, fetch_inbox, run_group_batch};
