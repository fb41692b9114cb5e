// ABOUTME: Defines all error types for the permgate library using thiserror.
// ABOUTME: Only strict entry points return these; lenient paths never fail.

/// Top-level error type for the permgate library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermgateError {
    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors from strict permission parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("Unparsable permission string: '{0}'")]
    Unparsable(String),
}

/// Errors from resolving tokens against the known areas and actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown area: '{0}'")]
    UnknownArea(String),

    #[error("Unknown action: '{0}'")]
    UnknownAction(String),
}
