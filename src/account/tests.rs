//! Tests for the account client

use super::*;
use crate::error::Error;
use crate::http::mock::MockBackend;
use crate::http::{FormParams, ListParams};
use crate::types::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn account_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": "account",
        "type": "custom",
        "country": "US",
        "email": "jenny@example.com",
        "charges_enabled": true,
        "payouts_enabled": false,
        "created": 1_700_000_000,
        "metadata": {"tier": "gold"}
    })
}

fn client(backend: &Arc<MockBackend>) -> Client {
    Client::new(backend.clone(), "sk_test_123")
}

// ============================================================================
// Resource Decoding Tests
// ============================================================================

#[test]
fn test_account_deserialize() {
    let account: Account = serde_json::from_value(account_json("acct_1")).unwrap();
    assert_eq!(account.id, "acct_1");
    assert_eq!(account.account_type.as_deref(), Some("custom"));
    assert!(account.charges_enabled);
    assert!(!account.payouts_enabled);
    assert!(!account.deleted);
    assert_eq!(account.created.unwrap().timestamp(), 1_700_000_000);
    assert_eq!(account.metadata.get("tier").map(String::as_str), Some("gold"));
}

#[test]
fn test_capability_status_unknown_value() {
    let capability: Capability = serde_json::from_value(json!({
        "id": "card_payments",
        "account": "acct_1",
        "status": "something_new"
    }))
    .unwrap();
    assert_eq!(capability.status, CapabilityStatus::Unknown);

    let capability: Capability =
        serde_json::from_value(json!({"id": "transfers", "status": "active"})).unwrap();
    assert_eq!(capability.status, CapabilityStatus::Active);
    assert!(capability.requested_at.is_none());
}

#[test]
fn test_account_params_form() {
    let params = AccountParams::new()
        .account_type("custom")
        .country("US")
        .email("jenny@example.com")
        .metadata("tier", "gold");
    let form = params.to_form();
    let pairs: Vec<(&str, &str)> = form.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

    assert_eq!(
        pairs,
        vec![
            ("type", "custom"),
            ("country", "US"),
            ("email", "jenny@example.com"),
            ("metadata[tier]", "gold"),
        ]
    );
}

#[test]
fn test_reject_params_form() {
    let form = AccountRejectParams::new("terms_of_service").to_form();
    assert_eq!(form, vec![("reason".to_string(), "terms_of_service".to_string())]);
}

// ============================================================================
// Client Tests
// ============================================================================

#[test]
fn test_create() {
    let backend = Arc::new(MockBackend::new().respond(Ok(account_json("acct_new"))));
    let account = client(&backend)
        .create(&AccountParams::new().account_type("express"))
        .unwrap();
    assert_eq!(account.id, "acct_new");

    let calls = backend.calls();
    assert_eq!(calls[0].method, Method::POST);
    assert_eq!(calls[0].path, "/v1/accounts");
    assert_eq!(calls[0].key, "sk_test_123");
    assert_eq!(calls[0].param("type"), Some("express"));
}

#[test]
fn test_get_current_account() {
    let backend = Arc::new(MockBackend::new().respond(Ok(account_json("acct_self"))));
    let account = client(&backend).get(&AccountParams::new()).unwrap();
    assert_eq!(account.id, "acct_self");

    let calls = backend.calls();
    assert_eq!(calls[0].method, Method::GET);
    assert_eq!(calls[0].path, "/v1/account");
    assert!(calls[0].params.is_empty());
}

#[test]
fn test_get_by_id_escapes_path() {
    let backend = Arc::new(MockBackend::new().respond(Ok(account_json("acct_1"))));
    client(&backend)
        .get_by_id("acct/1", &AccountParams::new())
        .unwrap();
    assert_eq!(backend.calls()[0].path, "/v1/accounts/acct%2F1");
}

#[test]
fn test_update() {
    let backend = Arc::new(MockBackend::new().respond(Ok(account_json("acct_1"))));
    client(&backend)
        .update("acct_1", &AccountParams::new().email("new@example.com"))
        .unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].method, Method::POST);
    assert_eq!(calls[0].path, "/v1/accounts/acct_1");
    assert_eq!(calls[0].param("email"), Some("new@example.com"));
}

#[test]
fn test_delete() {
    let backend = Arc::new(
        MockBackend::new().respond(Ok(json!({"id": "acct_1", "object": "account", "deleted": true}))),
    );
    let account = client(&backend)
        .delete("acct_1", &AccountParams::new())
        .unwrap();
    assert!(account.deleted);
    assert_eq!(backend.calls()[0].method, Method::DELETE);
}

#[test]
fn test_reject() {
    let backend = Arc::new(MockBackend::new().respond(Ok(account_json("acct_1"))));
    client(&backend)
        .reject("acct_1", &AccountRejectParams::new("fraud"))
        .unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].method, Method::POST);
    assert_eq!(calls[0].path, "/v1/accounts/acct_1/reject");
    assert_eq!(calls[0].param("reason"), Some("fraud"));
}

#[test]
fn test_call_error_is_returned() {
    let backend = Arc::new(MockBackend::new().respond(Err(Error::http_status(401, "nope"))));
    let err = client(&backend)
        .get_by_id("acct_1", &AccountParams::new())
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[test]
fn test_list_walks_pages() {
    let backend = Arc::new(
        MockBackend::new()
            .respond(Ok(json!({
                "object": "list",
                "url": "/v1/accounts",
                "has_more": true,
                "data": [account_json("acct_1"), account_json("acct_2")]
            })))
            .respond(Ok(json!({
                "object": "list",
                "url": "/v1/accounts",
                "has_more": false,
                "data": [account_json("acct_3")]
            }))),
    );

    let mut iter = client(&backend).list(&ListParams::new().limit(2).into());
    let mut ids = Vec::new();
    while iter.advance() {
        ids.push(iter.current().unwrap().id.clone());
        assert_eq!(iter.page().unwrap().url.as_deref(), Some("/v1/accounts"));
    }

    assert_eq!(ids, vec!["acct_1", "acct_2", "acct_3"]);
    assert!(iter.error().is_none());

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].param("starting_after"), Some("acct_2"));
    assert_eq!(calls[1].param("limit"), Some("2"));
}

#[test]
fn test_list_is_lazy() {
    let backend = Arc::new(MockBackend::new());
    let iter = client(&backend).list(&AccountListParams::new());
    assert_eq!(iter.fetch_count(), 0);
    assert!(backend.calls().is_empty());
}

#[test]
fn test_capabilities() {
    let backend = Arc::new(MockBackend::new().respond(Ok(json!({
        "object": "list",
        "has_more": false,
        "data": [
            {"id": "card_payments", "account": "acct_1", "status": "active", "requested": true},
            {"id": "transfers", "account": "acct_1", "status": "pending"}
        ]
    }))));

    let caps = client(&backend)
        .capabilities(&AccountCapabilitiesParams::new("acct_1"))
        .collect_all()
        .unwrap();

    assert_eq!(caps.len(), 2);
    assert_eq!(caps[0].id, "card_payments");
    assert!(caps[0].requested);
    assert_eq!(caps[1].status, CapabilityStatus::Pending);
    assert_eq!(backend.calls()[0].path, "/v1/accounts/acct_1/capabilities");
}

#[test]
fn test_capabilities_error_stops_iteration() {
    let backend = Arc::new(MockBackend::new().respond(Err(Error::http_status(404, "missing"))));

    let mut iter = client(&backend).capabilities(&AccountCapabilitiesParams::new("acct_x"));
    assert!(!iter.advance());
    assert!(iter.error().is_some());
    assert!(!iter.advance());
    assert_eq!(backend.calls().len(), 1);
}
