//! Bootstrap configuration bundle
//!
//! This module handles:
//! - The bundle data model (via [`Bundle`], [`GroupName`], [`GroupValue`])
//! - The catalogue of client-visible endpoints (via [`urls`])
//! - Wire names of open-ended group keys (via [`keys`])
//! - Application state metadata (via [`application`])
//! - Construction of the full authenticated bundle (via [`builder`])

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, fs};

pub mod application;
pub mod builder;
pub mod keys;
pub mod urls;
pub mod value;

pub use application::{ApplicationState, RequestContext};
pub use builder::BundleBuilder;
pub use urls::UrlKey;
pub use value::{GroupMap, GroupValue};

/// Top-level groups of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupName {
    Urls,
    Settings,
    Plugins,
    IsDebugEnabled,
    Application,
    ExternalLogins,
    Features,
}

impl GroupName {
    /// Every group a full bundle carries, in output order
    pub const ALL: [GroupName; 7] = [
        GroupName::Urls,
        GroupName::Settings,
        GroupName::Plugins,
        GroupName::IsDebugEnabled,
        GroupName::Application,
        GroupName::ExternalLogins,
        GroupName::Features,
    ];

    /// Wire name of the group
    pub fn as_str(self) -> &'static str {
        match self {
            GroupName::Urls => "urls",
            GroupName::Settings => "settings",
            GroupName::Plugins => "plugins",
            GroupName::IsDebugEnabled => "isDebugEnabled",
            GroupName::Application => "application",
            GroupName::ExternalLogins => "externalLogins",
            GroupName::Features => "features",
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from group name to group value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    groups: IndexMap<GroupName, GroupValue>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a group, replacing any previous value
    pub fn insert(&mut self, group: GroupName, value: impl Into<GroupValue>) {
        self.groups.insert(group, value.into());
    }

    pub fn get(&self, group: GroupName) -> Option<&GroupValue> {
        self.groups.get(&group)
    }

    /// The group's value, inserting `default()` first when the group is absent
    pub fn get_or_insert_with<F>(&mut self, group: GroupName, default: F) -> &mut GroupValue
    where
        F: FnOnce() -> GroupValue,
    {
        self.groups.entry(group).or_insert_with(default)
    }

    /// Look up a key inside a mapping group
    pub fn lookup(&self, group: GroupName, key: &str) -> Option<&GroupValue> {
        self.get(group).and_then(|v| v.get(key))
    }

    pub fn contains(&self, group: GroupName) -> bool {
        self.groups.contains_key(&group)
    }

    /// Group names present, in order
    pub fn groups(&self) -> impl Iterator<Item = GroupName> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupName, &GroupValue)> {
        self.groups.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether every group of the fixed catalogue is present and nothing else
    pub fn is_complete(&self) -> bool {
        self.len() == GroupName::ALL.len() && GroupName::ALL.iter().all(|g| self.contains(*g))
    }

    /// Serialize to JSON, preserving group and key names exactly
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| fs::serialization_failed(e.to_string()))
    }
}

impl FromIterator<(GroupName, GroupValue)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (GroupName, GroupValue)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
