//! Tolerant field decoding for backend payloads.
//!
//! Backends are not consistent about scalar types (HubSpot ids are numeric,
//! some timestamps arrive as epoch milliseconds), and the panel renders
//! whatever it is given.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional scalar as text.
///
/// Non-empty strings, non-zero numbers and `true` are kept as text. Falsy
/// scalars (`null`, `""`, `0`, `false`) and arrays or objects become `None`,
/// so they are treated as absent by the card and the grouper.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some(true.to_string()),
        _ => None,
    })
}
