// ABOUTME: Builds the full area -> actions matrix from the known catalog.
// ABOUTME: Used to render every grantable permission, e.g. in a role editor.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::codec;
use crate::catalog::{Action, Area};

/// Every known area mapped to every known action, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionHierarchy {
    entries: Vec<(String, Vec<String>)>,
}

impl PermissionHierarchy {
    /// Actions available for `area`, if the area is known.
    pub fn actions(&self, area: &str) -> Option<&[String]> {
        let area = area.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == area)
            .map(|(_, actions)| actions.as_slice())
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(area, _)| area.as_str())
    }

    pub fn contains(&self, area: &str, action: &str) -> bool {
        let action = action.to_lowercase();
        self.actions(area)
            .is_some_and(|actions| actions.iter().any(|a| *a == action))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(area, actions)| (area.as_str(), actions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical strings for the whole cross product.
    pub fn all_permissions(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(area, actions)| actions.iter().map(move |action| codec::format(area, action)))
            .collect()
    }
}

impl Serialize for PermissionHierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (area, actions) in &self.entries {
            map.serialize_entry(area, actions)?;
        }
        map.end()
    }
}

/// Build the hierarchy. Not cached; each call returns a fresh value.
pub fn permission_hierarchy() -> PermissionHierarchy {
    let actions: Vec<String> = Action::ALL.iter().map(|a| a.as_str().to_string()).collect();
    let entries = Area::ALL
        .iter()
        .map(|area| (area.as_str().to_string(), actions.clone()))
        .collect();
    PermissionHierarchy { entries }
}
