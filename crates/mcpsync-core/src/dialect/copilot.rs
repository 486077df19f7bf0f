//! Copilot dialect conversions.
//!
//! Copilot entries carry an explicit transport:
//! - stdio: `{ "type": "stdio", "command": "...", "args": [...], "env": {...} }`
//! - http: `{ "type": "http", "url": "..." }`
//!
//! Entries produced here are marked `"gallery": true`.

use serde_json::{Map, Value, json};

use super::{ConfigDocument, Dialect};
use crate::mcp::{McpTransport, masked_env, remote_bridge_entry, remote_bridge_url};

pub fn from_claude(source: &ConfigDocument) -> ConfigDocument {
    let servers = source
        .servers()
        .iter()
        .map(|(name, entry)| (name.clone(), render_server(entry)))
        .collect();
    ConfigDocument::new(Dialect::Copilot, servers)
}

/// Gemini shares Claude's entry shape, so this reuses the Claude conversion.
pub fn from_gemini(source: &ConfigDocument) -> ConfigDocument {
    let as_claude = ConfigDocument::new(Dialect::Claude, source.servers().clone());
    from_claude(&as_claude)
}

/// Express Copilot entries as launch commands for Claude or Gemini.
///
/// Remote servers become `npx -y mcp-remote <url>`. Entries with any other
/// transport are left out.
pub(crate) fn launch_entries(servers: &Map<String, Value>) -> Map<String, Value> {
    servers
        .iter()
        .filter_map(|(name, entry)| Some((name.clone(), render_launch(entry)?)))
        .collect()
}

fn render_launch(entry: &Value) -> Option<Value> {
    let entry = entry.as_object()?;
    match McpTransport::of_entry(entry)? {
        McpTransport::Stdio => {
            let mut obj = Map::new();
            if let Some(command) = entry.get("command") {
                obj.insert("command".to_string(), command.clone());
            }
            obj.insert(
                "args".to_string(),
                entry.get("args").cloned().unwrap_or_else(|| json!([])),
            );
            if let Some(env) = masked_env(entry.get("env")) {
                obj.insert("env".to_string(), env);
            }
            Some(Value::Object(obj))
        }
        McpTransport::Http => Some(remote_bridge_entry(
            entry.get("url").cloned().unwrap_or(Value::Null),
        )),
    }
}

/// Render a Claude/Gemini launch entry as a Copilot entry.
fn render_server(entry: &Value) -> Value {
    let empty = Map::new();
    let entry = entry.as_object().unwrap_or(&empty);
    let command = entry.get("command");
    let args = entry
        .get("args")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if let Some(url) = remote_bridge_url(command, args) {
        return json!({
            "type": McpTransport::Http.as_str(),
            "url": url,
            "gallery": true,
        });
    }

    let mut obj = Map::new();
    obj.insert("type".to_string(), json!(McpTransport::Stdio.as_str()));
    if let Some(command) = command {
        obj.insert("command".to_string(), command.clone());
    }
    obj.insert("args".to_string(), Value::Array(args.to_vec()));
    obj.insert("gallery".to_string(), json!(true));
    if let Some(env) = masked_env(entry.get("env")) {
        obj.insert("env".to_string(), env);
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::PLACEHOLDER;

    fn claude_doc(servers: Value) -> ConfigDocument {
        ConfigDocument::new(Dialect::Claude, servers.as_object().cloned().unwrap())
    }

    #[test]
    fn stdio_entry_gets_type_gallery_and_masked_env() {
        let source = claude_doc(json!({
            "fs": {
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-filesystem", "/tmp"],
                "env": {"TOKEN": "secret"}
            }
        }));

        let converted = from_claude(&source);

        assert_eq!(converted.dialect(), Dialect::Copilot);
        assert_eq!(
            converted.servers()["fs"],
            json!({
                "type": "stdio",
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-filesystem", "/tmp"],
                "gallery": true,
                "env": {"TOKEN": PLACEHOLDER}
            })
        );
    }

    #[test]
    fn bridged_entry_becomes_http() {
        let source = claude_doc(json!({
            "remote": {
                "command": "npx",
                "args": ["-y", "mcp-remote", "https://api.example.com/mcp"],
                "env": {"TOKEN": "secret"}
            }
        }));

        let converted = from_claude(&source);

        assert_eq!(
            converted.servers()["remote"],
            json!({
                "type": "http",
                "url": "https://api.example.com/mcp",
                "gallery": true
            })
        );
    }

    #[test]
    fn missing_args_default_to_empty_list() {
        let source = claude_doc(json!({"bin": {"command": "/usr/local/bin/server"}}));

        let converted = from_claude(&source);

        assert_eq!(
            converted.servers()["bin"],
            json!({
                "type": "stdio",
                "command": "/usr/local/bin/server",
                "args": [],
                "gallery": true
            })
        );
    }

    #[test]
    fn empty_env_is_omitted() {
        let source = claude_doc(json!({"s": {"command": "run", "args": [], "env": {}}}));

        let converted = from_claude(&source);

        assert!(converted.servers()["s"].get("env").is_none());
    }

    #[test]
    fn gemini_converts_like_claude() {
        let servers = json!({
            "local": {"command": "uvx", "args": ["mcp-server-git"]},
            "remote": {"command": "npx", "args": ["-y", "mcp-remote", "https://x.dev/mcp"]}
        });
        let gemini = ConfigDocument::new(Dialect::Gemini, servers.as_object().cloned().unwrap());

        assert_eq!(from_gemini(&gemini), from_claude(&claude_doc(servers)));
    }

    #[test]
    fn launch_entries_drop_unknown_transports() {
        let servers = json!({
            "local": {"type": "stdio", "command": "run", "args": ["x"]},
            "remote": {"type": "http", "url": "https://x.dev/mcp"},
            "events": {"type": "sse", "url": "https://x.dev/sse"},
            "untyped": {"command": "run"}
        });

        let converted = launch_entries(servers.as_object().unwrap());

        let names: Vec<_> = converted.keys().cloned().collect();
        assert_eq!(names, vec!["local", "remote"]);
        assert_eq!(
            converted["remote"],
            json!({"command": "npx", "args": ["-y", "mcp-remote", "https://x.dev/mcp"]})
        );
    }

    #[test]
    fn launch_entries_drop_gallery_flag() {
        let servers = json!({
            "s": {"type": "stdio", "command": "run", "args": [], "gallery": true}
        });

        let converted = launch_entries(servers.as_object().unwrap());

        assert_eq!(converted["s"], json!({"command": "run", "args": []}));
    }
}
