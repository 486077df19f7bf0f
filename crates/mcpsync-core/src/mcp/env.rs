//! Secret scrubbing for `env` maps.

use serde_json::{Map, Value};

/// Value written in place of every environment variable during translation.
pub const PLACEHOLDER: &str = "PLEASE_SET_YOUR_VARIABLE";

/// Placeholder copy of an `env` map, keeping its keys.
///
/// Returns `None` when `env` is absent, empty or not an object, in which
/// case no `env` field is emitted.
pub fn masked_env(env: Option<&Value>) -> Option<Value> {
    let map = env?.as_object().filter(|map| !map.is_empty())?;
    let masked = map
        .keys()
        .map(|key| (key.clone(), Value::String(PLACEHOLDER.to_string())))
        .collect::<Map<String, Value>>();
    Some(Value::Object(masked))
}

/// Replace the values of an entry's `env` map with the placeholder.
///
/// Other fields, and an `env` that is empty or not an object, are left as is.
pub fn mask_env_in_place(entry: &mut Map<String, Value>) {
    if let Some(masked) = masked_env(entry.get("env")) {
        entry.insert("env".to_string(), masked);
    }
}
