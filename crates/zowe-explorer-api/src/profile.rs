//! Loaded connection profiles.
//!
//! A [`Profile`] is owned by the caller. The register only reads its
//! `profile_type`; backends read the connection attributes they need.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named connection profile of a given type (e.g. `zosmf`, `zftp`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name as shown to the user.
    #[serde(default)]
    pub name: String,
    /// Profile type the register is keyed on.
    #[serde(rename = "type", default)]
    pub profile_type: String,
    /// Connection attributes (host, port, user, ...).
    #[serde(default)]
    pub profile: BTreeMap<String, Value>,
}

impl Profile {
    /// Create a profile with no attributes.
    pub fn new(name: impl Into<String>, profile_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_type: profile_type.into(),
            profile: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Set or replace an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.profile.insert(key.into(), value.into());
    }

    /// Raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.profile.get(key)
    }

    /// String attribute. Numbers are rendered to their decimal text.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.profile.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Port-sized numeric attribute; accepts numbers and numeric strings.
    pub fn u16(&self, key: &str) -> Option<u16> {
        match self.profile.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean attribute; accepts `true`/`false` strings.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.profile.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
