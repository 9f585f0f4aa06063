//! Endpoint table tests against a recording transport.
//!
//! Every endpoint must issue exactly one request with the expected verb and
//! URL, hand back the payload untouched, and surface failures unchanged.

mod common;

use common::{client_with, RecordingTransport, StaticCookie};
use gameserverapp_sdk::prelude::*;
use serde_json::{json, Value};

const BASE: &str = "https://api.gameserverapp.com/api";

type Call = (Method, &'static str, Result<Value, GsaError>);

/// Calls every endpoint once, in table order.
async fn call_all(client: &GsaClient) -> Vec<Call> {
    vec![
        (Method::Get, "domain/settings", client.domain().settings().await),
        (Method::Get, "domain/stats/hours-played", client.domain().stat(None).await),
        (Method::Get, "domain/stats/online-count", client.domain().stat(Some("online-count")).await),
        (
            Method::Get,
            "cluster/test-uuid/stats/online-count-last-7-days",
            client.clusters().stat("test-uuid", None).await,
        ),
        (
            Method::Get,
            "server/test-id/stats/online-count-last-7-days",
            client.servers().stat("test-id", None).await,
        ),
        (Method::Get, "servers", client.servers().list().await),
        (Method::Get, "group/test-uuid", client.groups().get("test-uuid").await),
        (Method::Get, "group/hours-played", client.groups().stat("test-uuid", None).await),
        (Method::Get, "group/test-uuid/log", client.groups().log("test-uuid").await),
        (
            Method::Post,
            "group/test-uuid",
            client
                .groups()
                .update_settings("test-uuid", "Message of the day", "About the group")
                .await,
        ),
        (Method::Get, "group", client.groups().list().await),
        (Method::Get, "user/test-uuid", client.users().get("test-uuid").await),
        (
            Method::Get,
            "user/test-uuid/stats/hours-played",
            client.users().stat("test-uuid", None).await,
        ),
        (Method::Get, "user", client.users().list().await),
        (Method::Get, "character/test-uuid", client.characters().get("test-uuid").await),
        (
            Method::Get,
            "character/hours-played",
            client.characters().stat("test-uuid", None).await,
        ),
        (Method::Get, "characters", client.characters().list().await),
        (Method::Get, "characters/top", client.characters().top().await),
        (Method::Get, "characters/fresh", client.characters().fresh().await),
        (Method::Get, "characters/online", client.characters().online().await),
        (Method::Get, "characters/spotlight", client.characters().spotlight().await),
        (Method::Get, "shop", client.shop().items(None).await),
        (
            Method::Get,
            "shop/featured?page=2",
            client.shop().items_with_query(Some("featured"), [("page", "2")]).await,
        ),
        (Method::Get, "shop/item-7", client.shop().item("item-7").await),
    ]
}

#[tokio::test]
async fn test_each_endpoint_issues_one_request_and_returns_payload() {
    let transport = RecordingTransport::replying(200, r#"{"result":"payload"}"#);
    let client = client_with(transport.clone());

    let calls = call_all(&client).await;
    let requests = transport.requests();
    assert_eq!(requests.len(), calls.len());

    for ((method, path, result), request) in calls.into_iter().zip(requests) {
        assert_eq!(request.method, method, "{path}");
        assert_eq!(request.url, format!("{BASE}/v1/{path}"));
        assert_eq!(result.unwrap(), json!({ "result": "payload" }), "{path}");
    }
}

#[tokio::test]
async fn test_each_endpoint_surfaces_http_errors() {
    let transport = RecordingTransport::replying(500, "Internal Server Error");
    let client = client_with(transport.clone());

    for (_, path, result) in call_all(&client).await {
        let err = result.unwrap_err();
        assert_eq!(err.status_code(), Some(500), "{path}");
        assert_eq!(err.message(), "Internal Server Error", "{path}");
    }
}

#[tokio::test]
async fn test_each_endpoint_surfaces_transport_errors() {
    let transport = RecordingTransport::failing("connection refused");
    let client = client_with(transport.clone());

    for (_, path, result) in call_all(&client).await {
        assert_eq!(
            result.unwrap_err(),
            GsaError::Transport {
                message: "connection refused".to_string()
            },
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_domain_stat_default_scenario() {
    let transport = RecordingTransport::replying(200, r#"{"stats":"domain-statistics"}"#);
    let client = client_with(transport.clone());

    let result = client.domain().stat(None).await.unwrap();

    assert_eq!(result, json!({ "stats": "domain-statistics" }));
    assert_eq!(
        transport.requests()[0].url,
        "https://api.gameserverapp.com/api/v1/domain/stats/hours-played"
    );
}

#[tokio::test]
async fn test_stat_calls_ignore_uuid_in_path() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = client_with(transport.clone());

    client.groups().stat("group-uuid", Some("kills")).await.unwrap();
    client.characters().stat("char-uuid", Some("kills")).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{BASE}/v1/group/kills"));
    assert_eq!(requests[1].url, format!("{BASE}/v1/character/kills"));
    assert!(requests.iter().all(|r| !r.url.contains("uuid")));
}

#[tokio::test]
async fn test_explicit_stat_types() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = client_with(transport.clone());

    client.clusters().stat("c1", Some("players")).await.unwrap();
    client.servers().stat("s1", Some("players")).await.unwrap();
    client.users().stat("u1", Some("kills")).await.unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE}/v1/cluster/c1/stats/players"),
            format!("{BASE}/v1/server/s1/stats/players"),
            format!("{BASE}/v1/user/u1/stats/kills"),
        ]
    );
}

#[tokio::test]
async fn test_only_group_settings_carries_a_body() {
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);
    let client = client_with(transport.clone());

    call_all(&client).await;

    for request in transport.requests() {
        match request.method {
            Method::Post => assert_eq!(
                request.body,
                Some(json!({ "motd": "Message of the day", "about": "About the group" }))
            ),
            _ => assert_eq!(request.body, None, "{}", request.url),
        }
    }
}

#[tokio::test]
async fn test_raw_delete_never_sends_body() {
    let transport = RecordingTransport::replying(204, "");
    let client = client_with(transport.clone());

    let result = client
        .request(Method::Delete, "v1", "group/test-uuid", Some(json!({ "x": 1 })))
        .await
        .unwrap();

    assert_eq!(result, Value::String(String::new()));
    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_headers_without_cookie() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = client_with(transport.clone());

    client.servers().list().await.unwrap();

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.header("X-AUTH-GSA-CLIENT-ID"), Some("test-key"));
    assert_eq!(request.header("User-Agent"), Some("GSA Rust API wrapper"));
    assert_eq!(request.header("Authorization"), None);
}

#[tokio::test]
async fn test_cookie_becomes_bearer_header() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = GsaClient::builder("test-key", "test-secret")
        .transport(transport.clone())
        .credentials(std::sync::Arc::new(StaticCookie("GSA_AUTH=abc123")))
        .build()
        .unwrap();

    client.users().list().await.unwrap();

    assert_eq!(
        transport.requests()[0].header("Authorization"),
        Some("Bearer GSA_AUTH=abc123")
    );
}

#[tokio::test]
async fn test_custom_base_url_is_used_verbatim() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = GsaClient::builder("test-key", "test-secret")
        .base_url("https://self-hosted.example.test/api/")
        .transport(transport.clone())
        .build()
        .unwrap();

    client.servers().list().await.unwrap();

    assert_eq!(
        transport.requests()[0].url,
        "https://self-hosted.example.test/api//v1/servers"
    );
}

#[tokio::test]
async fn test_clones_share_transport() {
    let transport = RecordingTransport::replying(200, "{}");
    let client = client_with(transport.clone());
    let other = client.clone();

    let (servers, users) = (client.servers(), other.users());
    let (a, b) = tokio::join!(servers.list(), users.list());
    a.unwrap();
    b.unwrap();

    assert_eq!(transport.requests().len(), 2);
}
