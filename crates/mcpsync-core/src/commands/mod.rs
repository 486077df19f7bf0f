//! High-level commands for mcpsync operations.
//!
//! These are the entry points called by the CLI frontend.

pub mod sync;

pub use sync::{SyncCommand, SyncOptions, SyncOutput, SyncReport};
