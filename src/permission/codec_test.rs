// ABOUTME: Tests for the permission codec - both syntaxes, failures, backend form.
// ABOUTME: Each parse branch is exercised on its own as well as through `parse`.

use super::*;
use crate::catalog::{Action, Area};
use crate::error::{CatalogError, PermgateError, PermissionError};

#[test]
fn test_format_lowercases() {
    assert_eq!(format("Users", "READ"), "users:read");
    assert_eq!(format("", ""), ":");
}

#[test]
fn test_parse_plain() {
    assert_eq!(parse("Stores:Write"), Permission::new("stores", "write"));
}

#[test]
fn test_parse_format_round_trip() {
    let pairs = [("Users", "Read"), ("stock_requests", "APPROVE"), ("widgets", "frob")];
    for (area, action) in pairs {
        let parsed = parse(&format(area, action));
        assert_eq!(parsed.area, area.to_lowercase());
        assert_eq!(parsed.action, action.to_lowercase());
    }
}

#[test]
fn test_parse_verbose() {
    let parsed = parse("PermissionArea.USERS:PermissionAction.READ");
    assert_eq!(parsed, Permission::new("users", "read"));
}

#[test]
fn test_parse_verbose_underscore_area() {
    let parsed = parse("PermissionArea.STOCK_REQUESTS:PermissionAction.APPROVE");
    assert_eq!(parsed, Permission::new("stock_requests", "approve"));
}

#[test]
fn test_parse_verbose_mixed_case_suffix() {
    let parsed = parse("PermissionArea.Users:permissionaction.Delete");
    assert_eq!(parsed, Permission::new("users", "delete"));
}

#[test]
fn test_parse_verbose_requires_prefix() {
    assert!(parse_verbose("users:read").is_none());
    // the prefix check is case-sensitive, so this falls through to a plain split
    assert!(parse_verbose("permissionarea.users:permissionaction.read").is_none());
}

#[test]
fn test_parse_plain_rejects_wrong_segment_count() {
    assert!(parse_plain("users").is_none());
    assert!(parse_plain("users:read:extra").is_none());
    assert!(parse_plain(":read").is_none());
    assert!(parse_plain("users:").is_none());
    assert!(parse_plain("").is_none());
}

#[test]
fn test_unparsable_returns_empty_pair() {
    for input in ["", "users", "a:b:c", ":", "::"] {
        let parsed = parse(input);
        assert!(!parsed.is_valid(), "{input:?} should not parse");
        assert_eq!(parsed.canonical(), ":");
    }
}

#[test]
fn test_strict_parse() {
    let parsed: Permission = "Hours:Approve".parse().unwrap();
    assert_eq!(parsed, Permission::new("hours", "approve"));

    let err = "nonsense".parse::<Permission>().unwrap_err();
    assert_eq!(err, PermissionError::Unparsable("nonsense".to_string()));
}

#[test]
fn test_display_is_canonical() {
    let permission = Permission::new("Payments", "Write");
    assert_eq!(permission.to_string(), "payments:write");
    assert_eq!(permission.to_string(), permission.canonical());
}

#[test]
fn test_to_backend_form() {
    assert_eq!(
        to_backend_form(&["users:read"]),
        vec!["PermissionArea.USERS:PermissionAction.READ"]
    );
}

#[test]
fn test_to_backend_form_keeps_length() {
    let out = to_backend_form(&[
        "stock_requests:approve",
        "garbage",
        "PermissionArea.SALES:PermissionAction.READ",
    ]);
    assert_eq!(
        out,
        vec![
            "PermissionArea.STOCK_REQUESTS:PermissionAction.APPROVE",
            "PermissionArea.:PermissionAction.",
            "PermissionArea.SALES:PermissionAction.READ",
        ]
    );
}

#[test]
fn test_resolve_known() {
    let resolved = parse("PermissionArea.STOCK_REQUESTS:PermissionAction.WRITE").resolve();
    assert_eq!(resolved, Ok((Area::StockRequests, Action::Write)));
}

#[test]
fn test_resolve_unknown_tokens() {
    assert_eq!(
        Permission::new("widgets", "read").resolve(),
        Err(PermgateError::Catalog(CatalogError::UnknownArea("widgets".to_string())))
    );
    assert_eq!(
        Permission::new("users", "frob").resolve(),
        Err(PermgateError::Catalog(CatalogError::UnknownAction("frob".to_string())))
    );
    assert_eq!(
        Permission::default().resolve(),
        Err(PermgateError::Permission(PermissionError::Unparsable(":".to_string())))
    );
}
