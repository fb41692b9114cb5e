// ABOUTME: Answers whether a held permission list authorizes an area/action.
// ABOUTME: Tolerates singular/plural area mismatches by one trailing `s`.

use super::codec::{self, Permission};
use super::normalize::PermissionSet;
use crate::catalog::{Action, Area};

/// Whether `held` grants `action` on `area`.
///
/// The exact canonical form is tried first. If that misses, the area's
/// trailing `s` is stripped (or appended when absent) and tried once more.
/// Irregular plurals are not handled. The action must always match exactly.
pub fn has_permission<S: AsRef<str>>(held: &[S], area: &str, action: &str) -> bool {
    let set = PermissionSet::from_raw(held);
    set_grants(&set, area, action)
}

/// Typed variant of [`has_permission`] for known areas and actions.
pub fn has_known_permission<S: AsRef<str>>(held: &[S], area: Area, action: Action) -> bool {
    has_permission(held, area.as_str(), action.as_str())
}

/// Whether any of the `(area, action)` requests is granted.
pub fn has_any_permission<S: AsRef<str>>(held: &[S], requests: &[(&str, &str)]) -> bool {
    let set = PermissionSet::from_raw(held);
    requests
        .iter()
        .any(|(area, action)| set_grants(&set, area, action))
}

/// Whether every `(area, action)` request is granted. No requests means `true`.
pub fn has_all_permissions<S: AsRef<str>>(held: &[S], requests: &[(&str, &str)]) -> bool {
    let set = PermissionSet::from_raw(held);
    requests
        .iter()
        .all(|(area, action)| set_grants(&set, area, action))
}

/// Distinct areas with at least one permission, in first-seen order.
pub fn areas_with_any_permission<S: AsRef<str>>(held: &[S]) -> Vec<String> {
    PermissionSet::from_raw(held).areas()
}

/// Whether any entry is for `area`, regardless of action.
///
/// Unlike [`has_permission`] there is no singular/plural fallback here.
pub fn has_any_for_area<S: AsRef<str>>(held: &[S], area: &str) -> bool {
    let area = area.to_lowercase();
    if area.is_empty() {
        return false;
    }
    held.iter()
        .any(|entry| codec::parse(entry.as_ref()).area == area)
}

fn set_grants(set: &PermissionSet, area: &str, action: &str) -> bool {
    if set.is_empty() {
        return false;
    }
    let required = Permission::new(area, action);
    if set.contains(&required.canonical()) {
        return true;
    }

    let alternate = match required.area.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => format!("{}s", required.area),
    };
    let granted = set.contains(&codec::format(&alternate, &required.action));
    if granted {
        tracing::debug!(
            requested = %required,
            matched_area = %alternate,
            "permission granted via singular/plural fallback"
        );
    }
    granted
}
