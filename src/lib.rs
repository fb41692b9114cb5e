// ABOUTME: Root module for permgate - permission string engine.
// ABOUTME: Parses, normalizes and matches `area:action` permissions.

pub mod catalog;
pub mod error;
pub mod permission;
pub mod prelude;

pub use error::PermgateError;
