//! Lookup then dashboard, over a real socket with the system resolver.

#[path = "../common/mod.rs"]
mod common;
use common::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_literal_lookup_appears_on_dashboard() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.lookup("127.0.0.1").await;
    assert_eq!(body, json!({ "IPs": ["127.0.0.1"] }));

    let (status, page) = server.dashboard().await;
    assert_eq!(status, 200);
    assert!(page.contains("127.0.0.1"));
    assert!(page.contains("flow-test"));

    server.shutdown();
}

#[tokio::test]
async fn test_localhost_lookup_returns_loopback() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.lookup("localhost").await;
    let ips = body["IPs"].as_array().expect("expected IPs");

    assert!(!ips.is_empty());
    for ip in ips {
        let ip: std::net::IpAddr = ip.as_str().unwrap().parse().unwrap();
        assert!(ip.is_loopback());
    }

    let (_, page) = server.dashboard().await;
    assert!(page.contains("localhost"));
}

#[tokio::test]
async fn test_errors_are_reported_in_band() {
    let server = TestServer::start().await.expect("Failed to start server");

    assert_eq!(
        server.lookup("").await,
        json!({ "Error": "Empty domain parameter" })
    );
    assert_eq!(
        server.lookup("does-not-exist.invalid").await,
        json!({ "Error": "Invalid domain address." })
    );

    let (status, page) = server.dashboard().await;
    assert_eq!(status, 200);
    assert!(!page.contains("does-not-exist.invalid"));
}

#[tokio::test]
async fn test_dashboard_lists_queries_in_arrival_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    server.lookup("127.0.0.2").await;
    server.lookup("::1").await;
    server.lookup("127.0.0.3").await;

    let (_, page) = server.dashboard().await;
    let first = page.find("127.0.0.2").unwrap();
    let second = page.find("::1").unwrap();
    let third = page.find("127.0.0.3").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_missing_template_fails_only_the_dashboard() {
    let server = TestServer::start_with_template("/nonexistent/index.html")
        .await
        .expect("Failed to start server");

    let (status, _) = server.dashboard().await;
    assert_eq!(status, 500);

    assert_eq!(
        server.lookup("127.0.0.1").await,
        json!({ "IPs": ["127.0.0.1"] })
    );
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_public_domain_lookup_appears_on_dashboard() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = server.lookup("example.com").await;
    assert!(!body["IPs"].as_array().expect("expected IPs").is_empty());

    let (_, page) = server.dashboard().await;
    assert!(page.contains("example.com"));
}
