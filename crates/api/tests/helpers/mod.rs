#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use iplookup_api::{create_routes, AppState};
use iplookup_application::ports::{DomainResolver, QueryLogRepository, TemplateSource};
use iplookup_application::use_cases::{RenderDashboardUseCase, ResolveDomainUseCase};
use iplookup_domain::{BuildInfo, DomainError};
use iplookup_infrastructure::repositories::InMemoryQueryLogRepository;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_BUILD: &str = "test-build-42";

pub const TEST_TEMPLATE: &str = "<p>build={{build}} count={{count}}</p>\
<ul>{{#queries}}<li>{{domain}}={{ips}}</li>{{/queries}}</ul>\
{{^queries}}<p>none</p>{{/queries}}";

// ============================================================================
// Mock DomainResolver
// ============================================================================

/// Resolves names from a fixed table. `*.slow.test` names resolve to
/// 192.0.2.1 after a short delay; anything else unknown fails.
pub struct StaticResolver {
    table: HashMap<String, Vec<IpAddr>>,
    calls: AtomicU64,
}

impl StaticResolver {
    pub fn new(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let table = entries
            .into_iter()
            .map(|(domain, ips)| {
                (
                    domain.to_string(),
                    ips.into_iter().map(|ip| ip.parse().unwrap()).collect(),
                )
            })
            .collect();
        Self {
            table,
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainResolver for StaticResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if domain.ends_with(".slow.test") {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            return Ok(vec!["192.0.2.1".parse().unwrap()]);
        }
        self.table
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("{domain}: not found")))
    }
}

// ============================================================================
// Mock TemplateSource
// ============================================================================

pub struct StaticTemplate(Option<String>);

impl StaticTemplate {
    pub fn new(template: &str) -> Self {
        Self(Some(template.to_string()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TemplateSource for StaticTemplate {
    async fn load(&self) -> Result<String, DomainError> {
        self.0
            .clone()
            .ok_or_else(|| DomainError::TemplateLoad("templates/index.html: not found".into()))
    }
}

// ============================================================================
// App fixture
// ============================================================================

pub struct TestApp {
    pub router: Router,
    pub resolver: Arc<StaticResolver>,
    pub query_log: Arc<InMemoryQueryLogRepository>,
}

impl TestApp {
    pub fn new(resolver: StaticResolver, template: StaticTemplate) -> Self {
        Self::build(resolver, template, false)
    }

    pub fn recording_failures(resolver: StaticResolver) -> Self {
        Self::build(resolver, StaticTemplate::new(TEST_TEMPLATE), true)
    }

    fn build(resolver: StaticResolver, template: StaticTemplate, record_failures: bool) -> Self {
        let resolver = Arc::new(resolver);
        let query_log = Arc::new(InMemoryQueryLogRepository::new());

        let state = AppState {
            resolve_domain: Arc::new(
                ResolveDomainUseCase::new(resolver.clone(), query_log.clone())
                    .with_record_failures(record_failures),
            ),
            render_dashboard: Arc::new(RenderDashboardUseCase::new(
                query_log.clone(),
                Arc::new(template),
                BuildInfo::new(TEST_BUILD),
            )),
        };

        Self {
            router: create_routes(state),
            resolver,
            query_log,
        }
    }

    pub async fn get(&self, uri: &str) -> (u16, Option<String>, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (u16, serde_json::Value) {
        let (status, _, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    pub async fn log_len(&self) -> usize {
        self.query_log.len().await.unwrap()
    }
}

pub fn default_resolver() -> StaticResolver {
    StaticResolver::new(vec![
        ("example.test", vec!["93.184.216.34", "2606:2800:220:1::1"]),
        ("one.test", vec!["10.0.0.1"]),
        ("two.test", vec!["10.0.0.2"]),
    ])
}
