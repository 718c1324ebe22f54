//! Interactive front end.
//!
//! - [`console`]: prompts, confirmations and progress over line-oriented I/O
//! - [`session`]: the menu loop driving fetch, summary and batches
//! - [`signal`]: Ctrl-C handling around batch execution

pub mod console;
pub mod session;
pub mod signal;

#[cfg(test)]
pub mod test_utils;
