// ABOUTME: Canonicalizes raw permission lists into deduplicated sets.
// ABOUTME: Unparsable entries are dropped; first occurrence order is kept.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::codec::{self, Permission};

/// Canonical form of a single raw permission string.
///
/// Unparsable input normalizes to `":"`.
pub fn normalize_one(input: &str) -> String {
    codec::parse(input).canonical()
}

/// Canonicalize and deduplicate, dropping entries that fail to parse.
pub fn normalize_set<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    PermissionSet::from_raw(inputs).into_vec()
}

/// Distinct non-empty areas across all parsable inputs.
pub fn areas_of<S: AsRef<str>>(inputs: &[S]) -> BTreeSet<String> {
    inputs
        .iter()
        .map(|input| codec::parse(input.as_ref()).area)
        .filter(|area| !area.is_empty())
        .collect()
}

/// A deduplicated, insertion-ordered set of canonical permission strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet {
    entries: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl PermissionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw strings in either syntax.
    pub fn from_raw<S: AsRef<str>>(inputs: &[S]) -> Self {
        inputs.iter().map(|input| codec::parse(input.as_ref())).collect()
    }

    /// Insert a permission. Returns `false` if it was invalid or already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        if !permission.is_valid() {
            return false;
        }
        let canonical = permission.canonical();
        if !self.seen.insert(canonical.clone()) {
            return false;
        }
        self.entries.push(canonical);
        true
    }

    /// Whether the canonical string is present. The argument must already be canonical.
    pub fn contains(&self, canonical: &str) -> bool {
        self.seen.contains(canonical)
    }

    pub fn contains_permission(&self, permission: &Permission) -> bool {
        permission.is_valid() && self.contains(&permission.canonical())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct areas in first-seen order.
    pub fn areas(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(|entry| entry.split_once(':').map(|(area, _)| area))
            .filter(|area| seen.insert(*area))
            .map(str::to_string)
            .collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = Self::new();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}
