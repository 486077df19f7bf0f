//! mcpsync Core Library
//!
//! Translates MCP server lists between the Copilot, Claude and Gemini
//! configuration dialects.

pub mod commands;
pub mod config;
pub mod dialect;
pub mod error;
pub mod mcp;
pub mod select;

pub use error::SyncError;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::commands::{SyncCommand, SyncOptions, SyncOutput, SyncReport};
    pub use crate::dialect::{ConfigDocument, Dialect};
    pub use crate::error::SyncError;
    pub use crate::mcp::{McpTransport, PLACEHOLDER};
    pub use crate::select::Candidate;
}
