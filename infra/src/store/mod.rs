//! Session flag stores and change notification
//!
//! The persisted boolean that gates shell routing lives behind
//! `SessionFlagStore`. This module ships an in-memory store, a JSON-file
//! store (the durable analogue of the mobile shell's key-value storage),
//! a broadcasting decorator that notifies the router on every write, and
//! a poller for shells that prefer an interval-based re-read.

pub mod file;
pub mod memory;
pub mod watcher;

pub use file::JsonFileFlagStore;
pub use memory::InMemoryFlagStore;
pub use watcher::{BroadcastFlagStore, FlagPoller};
