//! Group values: the tagged union every bundle group is made of

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered key → value mapping inside a group
pub type GroupMap = IndexMap<String, GroupValue>;

/// A value inside the bundle tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupValue {
    Bool(bool),
    Number(i64),
    String(String),
    List(Vec<GroupValue>),
    Map(GroupMap),
}

impl GroupValue {
    /// Build a mapping from `(key, value)` pairs, keeping their order
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, GroupValue)>,
    {
        GroupValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            GroupValue::Bool(_) => "bool",
            GroupValue::Number(_) => "number",
            GroupValue::String(_) => "string",
            GroupValue::List(_) => "list",
            GroupValue::Map(_) => "mapping",
        }
    }

    pub fn as_map(&self) -> Option<&GroupMap> {
        match self {
            GroupValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut GroupMap> {
        match self {
            GroupValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GroupValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[GroupValue]> {
        match self {
            GroupValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&GroupValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl From<bool> for GroupValue {
    fn from(value: bool) -> Self {
        GroupValue::Bool(value)
    }
}

impl From<i64> for GroupValue {
    fn from(value: i64) -> Self {
        GroupValue::Number(value)
    }
}

impl From<i32> for GroupValue {
    fn from(value: i32) -> Self {
        GroupValue::Number(i64::from(value))
    }
}

impl From<String> for GroupValue {
    fn from(value: String) -> Self {
        GroupValue::String(value)
    }
}

impl From<&str> for GroupValue {
    fn from(value: &str) -> Self {
        GroupValue::String(value.to_string())
    }
}

impl From<GroupMap> for GroupValue {
    fn from(value: GroupMap) -> Self {
        GroupValue::Map(value)
    }
}

impl From<Vec<GroupValue>> for GroupValue {
    fn from(value: Vec<GroupValue>) -> Self {
        GroupValue::List(value)
    }
}
