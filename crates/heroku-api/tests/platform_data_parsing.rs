//! Integration tests for parsing Platform API payloads.
//!
//! These tests validate that the heroku-api models deserialize recorded
//! response bodies, including the error payloads the dispatcher decodes into
//! the same record types when it is status blind.

use chrono::{Datelike, TimeZone, Utc};
use heroku_api::models::{App, Dyno, OAuthAuthorization};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture from disk.
fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_app_list() {
    let json_data = load_fixture("app_list.json");

    let apps: Vec<App> = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize app list data: {}\nJSON: {}",
            e, json_data
        )
    });

    assert_eq!(apps.len(), 2, "Expected 2 apps in test data");
}

#[test]
fn test_app_fields() {
    let apps: Vec<App> = serde_json::from_str(&load_fixture("app_list.json")).unwrap();

    let shop = apps
        .iter()
        .find(|app| app.name.as_deref() == Some("example-shop"))
        .expect("Should have the example-shop app");

    assert_eq!(shop.maintenance, Some(false));
    assert!(shop.archived_at.is_none());
    assert_eq!(shop.repo_size, Some(1024));
    assert_eq!(shop.slug_size, Some(52_428_800));
    assert_eq!(
        shop.owner.as_ref().and_then(|owner| owner.email.as_deref()),
        Some("owner@example.com")
    );
    assert_eq!(
        shop.stack.as_ref().and_then(|stack| stack.name.as_deref()),
        Some("cedar")
    );
    assert_eq!(
        shop.created_at,
        Some(Utc.with_ymd_and_hms(2013, 5, 21, 18, 3, 48).unwrap())
    );
}

#[test]
fn test_archived_app() {
    let apps: Vec<App> = serde_json::from_str(&load_fixture("app_list.json")).unwrap();

    let archived = apps
        .iter()
        .find(|app| app.archived_at.is_some())
        .expect("Should have an archived app");

    assert_eq!(archived.name.as_deref(), Some("old-worker"));
    assert_eq!(archived.maintenance, Some(true));
    assert_eq!(archived.archived_at.map(|at| at.year()), Some(2014));
    assert!(archived.buildpack_provided_description.is_none());
    assert!(archived.released_at.is_none());
}

#[test]
fn test_dyno_list() {
    let dynos: Vec<Dyno> = serde_json::from_str(&load_fixture("dyno_list.json")).unwrap();
    assert_eq!(dynos.len(), 2);

    let web = &dynos[0];
    assert_eq!(web.name.as_deref(), Some("web.1"));
    assert_eq!(web.process_type.as_deref(), Some("web"));
    assert_eq!(web.state.as_deref(), Some("up"));
    assert!(web.attach_url.is_none());
    assert_eq!(web.release.as_ref().and_then(|r| r.version), Some(42));

    let one_off = &dynos[1];
    assert_eq!(one_off.process_type.as_deref(), Some("run"));
    assert_eq!(one_off.size.as_deref(), Some("2X"));
    assert!(one_off
        .attach_url
        .as_deref()
        .is_some_and(|url| url.starts_with("rendezvous://")));
}

#[test]
fn test_dyno_type_serializes_under_wire_name() {
    let dynos: Vec<Dyno> = serde_json::from_str(&load_fixture("dyno_list.json")).unwrap();
    let value = serde_json::to_value(&dynos[0]).unwrap();

    assert_eq!(value["type"], "web");
    assert!(value.get("process_type").is_none());
    assert!(value.get("attach_url").is_none());
}

#[test]
fn test_oauth_authorization() {
    let authorization: OAuthAuthorization =
        serde_json::from_str(&load_fixture("oauth_authorization.json")).unwrap();

    let access = authorization.access_token.as_ref().unwrap();
    assert_eq!(access.expires_in, Some(2_592_000));
    assert_eq!(access.token.as_deref(), Some("HRKU-access-token"));

    let refresh = authorization.refresh_token.as_ref().unwrap();
    assert!(refresh.expires_in.is_none());

    assert_eq!(
        authorization
            .client
            .as_ref()
            .and_then(|client| client.redirect_uri.as_deref()),
        Some("https://example.com/auth/heroku/callback")
    );
    assert_eq!(
        authorization.grant.as_ref().and_then(|grant| grant.expires_in),
        Some(300)
    );
    assert_eq!(authorization.scope, Some(vec!["global".to_string()]));
}

#[test]
fn test_error_payload_fills_matching_fields_only() {
    let app: App = serde_json::from_str(&load_fixture("error_not_found.json")).unwrap();

    assert_eq!(app.id.as_deref(), Some("not_found"));
    assert!(app.name.is_none());
    assert!(app.created_at.is_none());
    assert!(app.owner.is_none());
}
