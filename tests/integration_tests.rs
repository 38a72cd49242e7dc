//! Integration tests using mock HTTP server
//!
//! Tests the full flow: account client → blocking HTTP backend → paginated results

use mockito::{Matcher, Server};
use resource_client::account::{
    AccountCapabilitiesParams, AccountListParams, AccountParams, AccountRejectParams, Client,
};
use resource_client::http::{Backend, HttpBackend, HttpBackendConfig, ListParams};
use resource_client::log::{Level, LeveledLogger, SharedBuffer};
use resource_client::types::Method;
use resource_client::{ClientConfig, Error};
use serde_json::json;
use std::sync::Arc;

const KEY: &str = "sk_test_ABCDEFGHIJKLMNOP";

fn backend(server: &Server) -> HttpBackend {
    let config = HttpBackendConfig::builder().base_url(server.url()).build();
    HttpBackend::with_config(config).unwrap()
}

fn client(server: &Server) -> Client {
    Client::new(Arc::new(backend(server)), KEY)
}

fn account(id: &str) -> serde_json::Value {
    json!({"id": id, "object": "account", "type": "express", "country": "FR"})
}

// ============================================================================
// Backend Tests
// ============================================================================

#[test]
fn test_backend_sends_auth_and_user_agent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/account")
        .match_header("authorization", format!("Bearer {KEY}").as_str())
        .match_header("user-agent", Matcher::Regex("^resource-client/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(account("acct_self").to_string())
        .create();

    let body = backend(&server)
        .call(Method::GET, "/v1/account", KEY, &[])
        .unwrap();
    assert_eq!(body["id"], "acct_self");
    mock.assert();
}

#[test]
fn test_backend_post_sends_form_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/accounts")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".to_string(), "express".to_string()),
            Matcher::UrlEncoded("metadata[tier]".to_string(), "gold".to_string()),
        ]))
        .with_status(200)
        .with_body(account("acct_new").to_string())
        .create();

    let created = client(&server)
        .create(
            &AccountParams::new()
                .account_type("express")
                .metadata("tier", "gold"),
        )
        .unwrap();
    assert_eq!(created.id, "acct_new");
    mock.assert();
}

#[test]
fn test_backend_api_error_envelope() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/accounts/acct_missing")
        .with_status(404)
        .with_body(
            json!({"error": {
                "type": "invalid_request_error",
                "message": "No such account: 'acct_missing'",
                "code": "resource_missing",
                "param": "account"
            }})
            .to_string(),
        )
        .create();

    let err = client(&server)
        .get_by_id("acct_missing", &AccountParams::new())
        .unwrap_err();
    match err {
        Error::Api { status, error } => {
            assert_eq!(status, 404);
            assert_eq!(error.code.as_deref(), Some("resource_missing"));
            assert_eq!(error.param.as_deref(), Some("account"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_backend_plain_error_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/account")
        .with_status(503)
        .with_body("upstream unavailable")
        .create();

    let err = client(&server).get(&AccountParams::new()).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: upstream unavailable");
}

#[test]
fn test_backend_error_log_is_redacted() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/account")
        .with_status(401)
        .with_body(
            json!({"error": {
                "type": "invalid_request_error",
                "message": format!("Invalid API Key provided: {KEY}")
            }})
            .to_string(),
        )
        .create();

    let stderr = SharedBuffer::new();
    let stdout = SharedBuffer::new();
    let logger = LeveledLogger::new(Level::Debug)
        .with_primary(stdout.sink())
        .with_diagnostic(stderr.sink());
    let backend = backend(&server).with_logger(Arc::new(logger));

    let err = backend
        .call(Method::GET, "/v1/account", KEY, &[])
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    let logged = stderr.contents();
    assert!(logged.starts_with("[ERROR] Request error from API (status 401)"));
    assert!(logged.contains("sk_test_AB**********MNOP"));
    assert!(!logged.contains(KEY));
    assert!(stdout.contents().starts_with("[DEBUG] Requesting GET "));
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[test]
fn test_list_accounts_across_pages() {
    let mut server = Server::new();
    let first = server
        .mock("GET", "/v1/accounts")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .with_status(200)
        .with_body(
            json!({
                "object": "list",
                "url": "/v1/accounts",
                "has_more": true,
                "data": [account("acct_1"), account("acct_2")]
            })
            .to_string(),
        )
        .expect(1)
        .create();
    let second = server
        .mock("GET", "/v1/accounts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".to_string(), "2".to_string()),
            Matcher::UrlEncoded("starting_after".to_string(), "acct_2".to_string()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "object": "list",
                "url": "/v1/accounts",
                "has_more": false,
                "data": [account("acct_3")]
            })
            .to_string(),
        )
        .expect(1)
        .create();

    let params = AccountListParams::from(ListParams::new().limit(2));
    let accounts = client(&server).list(&params).collect_all().unwrap();

    let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["acct_1", "acct_2", "acct_3"]);
    first.assert();
    second.assert();
}

#[test]
fn test_list_stops_early_without_extra_fetch() {
    let mut server = Server::new();
    let first = server
        .mock("GET", "/v1/accounts")
        .with_status(200)
        .with_body(
            json!({"has_more": true, "data": [account("acct_1"), account("acct_2")]}).to_string(),
        )
        .expect(1)
        .create();

    let mut iter = client(&server).list(&AccountListParams::new());
    assert!(iter.advance());
    assert_eq!(iter.current().unwrap().id, "acct_1");
    drop(iter);

    first.assert();
}

#[test]
fn test_list_error_mid_stream() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/accounts/acct_1/capabilities")
        .match_query(Matcher::Exact("limit=1".to_string()))
        .with_status(200)
        .with_body(
            json!({"has_more": true, "data": [{"id": "card_payments", "status": "active"}]})
                .to_string(),
        )
        .create();
    let failing = server
        .mock("GET", "/v1/accounts/acct_1/capabilities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".to_string(), "1".to_string()),
            Matcher::UrlEncoded("starting_after".to_string(), "card_payments".to_string()),
        ]))
        .with_status(500)
        .with_body("internal")
        .expect(1)
        .create();

    let mut params = AccountCapabilitiesParams::new("acct_1");
    params.list = ListParams::new().limit(1);
    let mut iter = client(&server).capabilities(&params);
    assert!(iter.advance());
    assert_eq!(iter.current().unwrap().id, "card_payments");
    assert!(!iter.advance());
    assert_eq!(iter.error().and_then(Error::status), Some(500));
    assert!(!iter.advance());

    failing.assert();
}

// ============================================================================
// Client Tests
// ============================================================================

#[test]
fn test_reject_account() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/accounts/acct_1/reject")
        .match_body(Matcher::UrlEncoded("reason".to_string(), "fraud".to_string()))
        .with_status(200)
        .with_body(account("acct_1").to_string())
        .create();

    let rejected = client(&server)
        .reject("acct_1", &AccountRejectParams::new("fraud"))
        .unwrap();
    assert_eq!(rejected.id, "acct_1");
    mock.assert();
}

#[test]
fn test_delete_account_sends_delete() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/v1/accounts/acct_1")
        .with_status(200)
        .with_body(json!({"id": "acct_1", "object": "account", "deleted": true}).to_string())
        .create();

    let deleted = client(&server)
        .delete("acct_1", &AccountParams::new())
        .unwrap();
    assert!(deleted.deleted);
    mock.assert();
}

#[test]
fn test_client_from_config() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/account")
        .with_status(200)
        .with_body(account("acct_cfg").to_string())
        .create();

    let yaml = format!(
        "api_key: {KEY}\nbase_url: {}\ntimeout_secs: 5\nlog_level: warn\n",
        server.url()
    );
    let config = ClientConfig::from_yaml_str(&yaml).unwrap();
    let account = Client::from_config(&config)
        .unwrap()
        .get(&AccountParams::new())
        .unwrap();
    assert_eq!(account.id, "acct_cfg");
    mock.assert();
}

#[test]
fn test_client_from_invalid_config() {
    let err = Client::from_config(&ClientConfig::new("")).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}
