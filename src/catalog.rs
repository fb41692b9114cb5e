// ABOUTME: Closed enumerations of the areas and actions the application knows.
// ABOUTME: Strings outside these sets are still accepted everywhere else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A functional area that permissions are scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Users,
    Roles,
    Stores,
    Employees,
    Hours,
    Payments,
    Inventory,
    StockRequests,
    Sales,
    Reports,
}

impl Area {
    /// Every known area, in display order.
    pub const ALL: [Area; 10] = [
        Area::Users,
        Area::Roles,
        Area::Stores,
        Area::Employees,
        Area::Hours,
        Area::Payments,
        Area::Inventory,
        Area::StockRequests,
        Area::Sales,
        Area::Reports,
    ];

    /// The lower-case token used in canonical permission strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Users => "users",
            Area::Roles => "roles",
            Area::Stores => "stores",
            Area::Employees => "employees",
            Area::Hours => "hours",
            Area::Payments => "payments",
            Area::Inventory => "inventory",
            Area::StockRequests => "stock_requests",
            Area::Sales => "sales",
            Area::Reports => "reports",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_lowercase();
        Area::ALL
            .into_iter()
            .find(|area| area.as_str() == token)
            .ok_or_else(|| CatalogError::UnknownArea(s.to_string()))
    }
}

/// An operation kind performed within an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Write,
    Delete,
    Approve,
}

impl Action {
    /// Every known action, in display order.
    pub const ALL: [Action; 4] = [Action::Read, Action::Write, Action::Delete, Action::Approve];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
            Action::Delete => "delete",
            Action::Approve => "approve",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_lowercase();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == token)
            .ok_or_else(|| CatalogError::UnknownAction(s.to_string()))
    }
}
