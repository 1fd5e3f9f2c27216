//! Bundle projection
//!
//! Derives a reduced bundle from a full one through a declarative
//! [`Whitelist`]. Projection only removes groups and keys; it never
//! transforms a value it keeps.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::bundle::{Bundle, GroupMap, GroupName, GroupValue};
use crate::error::{Result, projection};

pub mod anonymous;

pub use anonymous::{AnonymousBundleAdapter, anonymous_whitelist};

/// What a whitelist permits within one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allowance {
    /// Keep the group unmodified, including all nested content
    Group,
    /// Keep only these keys of the group's mapping
    Keys(Vec<String>),
}

impl Allowance {
    /// An empty key list means "keep the whole group"
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            Allowance::Group
        } else {
            Allowance::Keys(keys)
        }
    }

    pub fn permits(&self, key: &str) -> bool {
        match self {
            Allowance::Group => true,
            Allowance::Keys(keys) => keys.iter().any(|k| k == key),
        }
    }
}

/// Mapping from group to what may be kept of it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Whitelist {
    entries: IndexMap<GroupName, Allowance>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a whole group
    pub fn keep_group(mut self, group: GroupName) -> Self {
        self.entries.insert(group, Allowance::Group);
        self
    }

    /// Keep the named keys of a group (the whole group when `keys` is empty)
    pub fn keep_keys<I, K>(mut self, group: GroupName, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.entries.insert(group, Allowance::from_keys(keys));
        self
    }

    pub fn allowance(&self, group: GroupName) -> Option<&Allowance> {
        self.entries.get(&group)
    }

    /// Whether a key of a group survives projection
    pub fn permits(&self, group: GroupName, key: &str) -> bool {
        self.allowance(group).is_some_and(|a| a.permits(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupName, &Allowance)> {
        self.entries.iter().map(|(g, a)| (*g, a))
    }
}

/// Project `full` through `whitelist`.
///
/// - groups absent from the whitelist are dropped
/// - [`Allowance::Group`] keeps the group as is
/// - [`Allowance::Keys`] keeps only those keys of the group's mapping, one
///   level deep; a non-mapping group is an error
pub fn project(full: &Bundle, whitelist: &Whitelist) -> Result<Bundle> {
    let mut reduced = Bundle::new();

    for (group, value) in full.iter() {
        let Some(allowance) = whitelist.allowance(group) else {
            trace!(%group, "dropping group");
            continue;
        };

        match allowance {
            Allowance::Group => reduced.insert(group, value.clone()),
            Allowance::Keys(_) => {
                let GroupValue::Map(map) = value else {
                    return Err(projection::shape_mismatch(group.as_str(), value.kind()));
                };
                reduced.insert(group, GroupValue::Map(retain_keys(group, map, allowance)));
            }
        }
    }

    debug!(
        kept = reduced.len(),
        dropped = full.len() - reduced.len(),
        "projected bundle"
    );
    Ok(reduced)
}

fn retain_keys(group: GroupName, map: &GroupMap, allowance: &Allowance) -> GroupMap {
    map.iter()
        .filter(|(key, _)| {
            let keep = allowance.permits(key);
            if !keep {
                trace!(%group, %key, "dropping key");
            }
            keep
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
