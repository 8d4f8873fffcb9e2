//! Character schema

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named game character, the stock member type for a team
///
/// Equal names do not make two characters the same team member; identity is
/// decided by the [`Member`](crate::Member) handle that wraps the character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Display name
    pub name: String,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
