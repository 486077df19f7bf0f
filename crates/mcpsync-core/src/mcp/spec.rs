//! Transport classification for MCP server entries.

use serde_json::{Map, Value, json};

/// Launcher command used to bridge a remote server into a stdio-only dialect.
pub const REMOTE_BRIDGE_COMMAND: &str = "npx";

/// Arguments that precede the URL in a bridged remote entry.
pub const REMOTE_BRIDGE_ARGS: [&str; 2] = ["-y", "mcp-remote"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpTransport {
    Stdio,
    Http,
}

impl McpTransport {
    /// Read the `type` field of a Copilot entry.
    ///
    /// Returns `None` for a missing or unrecognised transport; callers drop
    /// such entries.
    pub fn of_entry(entry: &Map<String, Value>) -> Option<Self> {
        entry
            .get("type")
            .and_then(Value::as_str)
            .and_then(|value| Self::try_from(value).ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            McpTransport::Stdio => "stdio",
            McpTransport::Http => "http",
        }
    }
}

impl TryFrom<&str> for McpTransport {
    type Error = anyhow::Error;

    // Exact match: Copilot writes the transport in lowercase.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "stdio" => Ok(McpTransport::Stdio),
            "http" => Ok(McpTransport::Http),
            _ => anyhow::bail!("Invalid transport: '{}'. Valid values: stdio, http", value),
        }
    }
}

/// Render the stdio launch entry that reaches `url` through `mcp-remote`.
pub fn remote_bridge_entry(url: Value) -> Value {
    json!({
        "command": REMOTE_BRIDGE_COMMAND,
        "args": [REMOTE_BRIDGE_ARGS[0], REMOTE_BRIDGE_ARGS[1], url],
    })
}

/// Recognise a bridged remote entry and return its URL.
///
/// Any stdio server that really is launched as `npx -y mcp-remote <x>` is
/// reported as remote too; the launch shape alone cannot tell them apart.
pub fn remote_bridge_url<'a>(command: Option<&Value>, args: &'a [Value]) -> Option<&'a Value> {
    if command.and_then(Value::as_str) != Some(REMOTE_BRIDGE_COMMAND) || args.len() <= 2 {
        return None;
    }
    let prefix_matches = args
        .iter()
        .zip(REMOTE_BRIDGE_ARGS)
        .all(|(arg, expected)| arg.as_str() == Some(expected));
    if prefix_matches { args.get(2) } else { None }
}
