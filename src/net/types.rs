//! Wire DTOs for the to-do collection.
//!
//! DESIGN
//! ======
//! Item identity belongs to the server. `TodoId` accepts either a JSON number
//! or string and writes back exactly what it read, so the client never needs
//! to know which the backend uses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque server-assigned item identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A to-do item as returned by `GET /todos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Server-assigned identifier.
    pub id: TodoId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPayload {
    pub title: String,
    pub description: String,
}

/// Nullable text columns arrive as `null`; render them as empty.
fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
