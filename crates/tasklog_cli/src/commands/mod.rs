//! CLI command implementations.

pub mod add;
pub mod delete;
pub mod list;
pub mod output;
pub mod update;

use clap::ValueEnum;

/// Output format for commands that print records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// JSON, one document per invocation
    Json,
}
