//! MCP server entry handling shared by every dialect.

pub mod env;
pub mod spec;

pub use env::{PLACEHOLDER, mask_env_in_place, masked_env};
pub use spec::{McpTransport, remote_bridge_entry, remote_bridge_url};
