//! # Tasklog Core
//!
//! The record store for Tasklog.
//!
//! This crate provides:
//! - [`RecordStore`] with `list`, `get`, `update`, `add` and `delete`
//! - Serialized access: one lock per store, held for the whole
//!   load-mutate-save cycle
//! - Atomic writes through [`tasklog_storage`] backends
//! - Typed errors for every failure path ([`CoreError`])
//!
//! Records are always returned and persisted sorted by difficulty
//! (Easy, Medium, Hard, then anything else), ties in prior order.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod field;
mod store;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use field::{AttemptSlot, Change, Field, NewRecord};
pub use store::{next_number, RecordStore};
pub use tasklog_codec::{Difficulty, Record, ATTEMPT_SLOTS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
