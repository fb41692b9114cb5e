// ABOUTME: Converts permission strings to and from the (area, action) pair.
// ABOUTME: Accepts both `area:action` and `PermissionArea.X:PermissionAction.Y`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{Action, Area};
use crate::error::{PermgateError, PermissionError};

const VERBOSE_AREA_PREFIX: &str = "PermissionArea.";
const VERBOSE_ACTION_PREFIX: &str = "PermissionAction.";

static VERBOSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PermissionArea\.(\w+):PermissionAction\.(\w+)")
        .expect("verbose permission pattern is a valid regex")
});

/// A parsed permission: an action within an area.
///
/// Both fields are lower-case. A permission with an empty area or action is
/// invalid; that is how unparsable input is represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    pub area: String,
    pub action: String,
}

impl Permission {
    /// Create a permission, lower-casing both parts.
    pub fn new(area: impl AsRef<str>, action: impl AsRef<str>) -> Self {
        Self {
            area: area.as_ref().to_lowercase(),
            action: action.as_ref().to_lowercase(),
        }
    }

    /// Whether both area and action are present.
    pub fn is_valid(&self) -> bool {
        !self.area.is_empty() && !self.action.is_empty()
    }

    /// The canonical `area:action` string. Invalid permissions render as `":"`.
    pub fn canonical(&self) -> String {
        format(&self.area, &self.action)
    }

    /// The upper-cased `PermissionArea.X:PermissionAction.Y` string.
    pub fn to_backend_form(&self) -> String {
        format!(
            "{}{}:{}{}",
            VERBOSE_AREA_PREFIX,
            self.area.to_uppercase(),
            VERBOSE_ACTION_PREFIX,
            self.action.to_uppercase()
        )
    }

    /// Resolve against the known catalog. Unknown tokens are an error here
    /// even though they are accepted everywhere else.
    pub fn resolve(&self) -> Result<(Area, Action), PermgateError> {
        if !self.is_valid() {
            return Err(PermissionError::Unparsable(self.canonical()).into());
        }
        Ok((self.area.parse::<Area>()?, self.action.parse::<Action>()?))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.area, self.action)
    }
}

/// Strict parsing: unlike [`parse`], unparsable input is an error.
impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_verbose(s)
            .or_else(|| parse_plain(s))
            .ok_or_else(|| PermissionError::Unparsable(s.to_string()))
    }
}

/// Join area and action into the canonical lower-case form.
pub fn format(area: &str, action: &str) -> String {
    format!("{}:{}", area.to_lowercase(), action.to_lowercase())
}

/// Parse a permission string in either surface syntax.
///
/// The verbose form is tried first, and only when the input mentions
/// `PermissionArea.`. Anything else is split on `:`. Input matching neither
/// yields an empty (invalid) permission and a warning.
pub fn parse(input: &str) -> Permission {
    if let Some(permission) = parse_verbose(input).or_else(|| parse_plain(input)) {
        return permission;
    }

    tracing::warn!(input, "unparsable permission string");
    Permission::default()
}

/// Match `PermissionArea.(\w+):PermissionAction.(\w+)`, ignoring case.
pub fn parse_verbose(input: &str) -> Option<Permission> {
    if !input.contains(VERBOSE_AREA_PREFIX) {
        return None;
    }

    let captures = VERBOSE_PATTERN.captures(input)?;
    Some(Permission::new(&captures[1], &captures[2]))
}

/// Split on `:` and accept exactly two non-empty segments.
pub fn parse_plain(input: &str) -> Option<Permission> {
    let mut segments = input.split(':');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(area), Some(action), None) if !area.is_empty() && !action.is_empty() => {
            Some(Permission::new(area, action))
        }
        _ => None,
    }
}

/// Convert permissions to the verbose upper-case form used by the backend.
///
/// The output has one entry per input. Unparsable entries become the
/// degenerate `PermissionArea.:PermissionAction.`.
pub fn to_backend_form<S: AsRef<str>>(permissions: &[S]) -> Vec<String> {
    permissions
        .iter()
        .map(|p| parse(p.as_ref()).to_backend_form())
        .collect()
}
