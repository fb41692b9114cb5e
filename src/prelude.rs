// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use permgate::prelude::*;` to get started quickly.

pub use crate::catalog::{Action, Area};
pub use crate::error::{CatalogError, PermgateError, PermissionError};
pub use crate::permission::{
    Permission, PermissionHierarchy, PermissionSet, areas_of, areas_with_any_permission,
    has_all_permissions, has_any_for_area, has_any_permission, has_known_permission,
    has_permission, normalize_one, normalize_set, permission_hierarchy, to_backend_form,
};
