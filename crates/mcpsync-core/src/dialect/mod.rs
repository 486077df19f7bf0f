//! Dialect model and the pairwise translation table.
//!
//! Each supported tool stores its MCP server list in its own JSON envelope:
//!
//! - Copilot (`copilot.json`): `{ "servers": {...}, "inputs": [] }`, entries
//!   tagged with `"type": "stdio" | "http"`
//! - Claude (`claude.json`): `{ "globalShortcut": "", "mcpServers": {...} }`,
//!   entries are always launch commands
//! - Gemini (`gemini.json`): `{ "mcpServers": {...} }`, same entry shape as
//!   Claude
//!
//! A [`ConfigDocument`] carries the dialect tag plus the server map, and
//! [`ConfigDocument::translate`] dispatches to the conversion for each ordered
//! pair of dialects.

pub mod claude;
pub mod copilot;
pub mod gemini;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::mcp::mask_env_in_place;

/// Supported configuration dialects, in auto-selection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// GitHub Copilot (VS Code `mcp.json` layout)
    Copilot,
    /// Claude Desktop
    Claude,
    /// Gemini CLI
    Gemini,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Copilot, Dialect::Claude, Dialect::Gemini];

    pub fn id(&self) -> &'static str {
        match self {
            Dialect::Copilot => "copilot",
            Dialect::Claude => "claude",
            Dialect::Gemini => "gemini",
        }
    }

    /// Fixed filename read and written for this dialect.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dialect::Copilot => "copilot.json",
            Dialect::Claude => "claude.json",
            Dialect::Gemini => "gemini.json",
        }
    }

    /// Top-level key holding the server map.
    pub fn servers_key(&self) -> &'static str {
        match self {
            // Copilot uses "servers" instead of "mcpServers"
            Dialect::Copilot => "servers",
            Dialect::Claude | Dialect::Gemini => "mcpServers",
        }
    }

    /// The two other dialects, in priority order.
    pub fn siblings(&self) -> [Dialect; 2] {
        match self {
            Dialect::Copilot => [Dialect::Claude, Dialect::Gemini],
            Dialect::Claude => [Dialect::Copilot, Dialect::Gemini],
            Dialect::Gemini => [Dialect::Copilot, Dialect::Claude],
        }
    }

    /// Detect the dialect from a filename by substring match.
    ///
    /// Dialects are checked in [`Dialect::ALL`] order, so a name containing
    /// several dialect filenames resolves to the first.
    pub fn from_file_name(name: &str) -> Option<Dialect> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| name.contains(dialect.file_name()))
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A server list tagged with the dialect it is written in.
///
/// Entries are kept as raw JSON objects so shallow-copy conversions carry
/// fields through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    dialect: Dialect,
    servers: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new(dialect: Dialect, servers: Map<String, Value>) -> Self {
        Self { dialect, servers }
    }

    /// Read the server map out of a decoded document root.
    ///
    /// A missing or non-object server map is treated as empty. Other
    /// top-level fields are not carried.
    pub fn from_root(dialect: Dialect, root: &Map<String, Value>) -> Self {
        let servers = root
            .get(dialect.servers_key())
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Self::new(dialect, servers)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn servers(&self) -> &Map<String, Value> {
        &self.servers
    }

    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    /// Render the document with its dialect's envelope.
    pub fn to_value(&self) -> Value {
        let servers = Value::Object(self.servers.clone());
        match self.dialect {
            Dialect::Copilot => json!({ "servers": servers, "inputs": [] }),
            Dialect::Claude => json!({ "globalShortcut": "", "mcpServers": servers }),
            Dialect::Gemini => json!({ "mcpServers": servers }),
        }
    }

    /// Translate into `target`.
    ///
    /// Secret `env` values never survive a translation. Translating into the
    /// document's own dialect returns it unchanged.
    pub fn translate(&self, target: Dialect) -> ConfigDocument {
        match (self.dialect, target) {
            (Dialect::Copilot, Dialect::Claude) => claude::from_copilot(self),
            (Dialect::Copilot, Dialect::Gemini) => gemini::from_copilot(self),
            (Dialect::Claude, Dialect::Copilot) => copilot::from_claude(self),
            (Dialect::Claude, Dialect::Gemini) => gemini::from_claude(self),
            (Dialect::Gemini, Dialect::Copilot) => copilot::from_gemini(self),
            (Dialect::Gemini, Dialect::Claude) => claude::from_gemini(self),
            (Dialect::Copilot, Dialect::Copilot)
            | (Dialect::Claude, Dialect::Claude)
            | (Dialect::Gemini, Dialect::Gemini) => self.clone(),
        }
    }

    /// Translate into both sibling dialects.
    pub fn translate_siblings(&self) -> [ConfigDocument; 2] {
        self.dialect
            .siblings()
            .map(|target| self.translate(target))
    }
}

/// Copy launch-shaped entries verbatim, scrubbing `env` values.
///
/// Shared by the Claude <-> Gemini conversions, which have the same entry
/// shape on both sides.
fn copy_masked(servers: &Map<String, Value>) -> Map<String, Value> {
    servers
        .iter()
        .map(|(name, entry)| {
            let entry = match entry {
                Value::Object(fields) => {
                    let mut fields = fields.clone();
                    mask_env_in_place(&mut fields);
                    Value::Object(fields)
                }
                other => other.clone(),
            };
            (name.clone(), entry)
        })
        .collect()
}
