use iplookup_api::{create_routes, AppState};
use iplookup_application::use_cases::{RenderDashboardUseCase, ResolveDomainUseCase};
use iplookup_domain::BuildInfo;
use iplookup_infrastructure::{FileTemplateSource, InMemoryQueryLogRepository, SystemResolver};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

/// The dashboard template shipped with the repository.
const TEMPLATE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../templates/index.html");

/// Full service bound to an ephemeral loopback port, wired with the
/// production adapters.
pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::start_with_template(TEMPLATE_PATH).await
    }

    pub async fn start_with_template(template_path: &str) -> Result<Self, std::io::Error> {
        let query_log = Arc::new(InMemoryQueryLogRepository::new());
        let state = AppState {
            resolve_domain: Arc::new(ResolveDomainUseCase::new(
                Arc::new(SystemResolver::from_millis(5000)),
                query_log.clone(),
            )),
            render_dashboard: Arc::new(RenderDashboardUseCase::new(
                query_log,
                Arc::new(FileTemplateSource::new(template_path)),
                BuildInfo::new("flow-test"),
            )),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, create_routes(state))
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn lookup(&self, domain: &str) -> serde_json::Value {
        self.client
            .get(self.url("/service/ip"))
            .query(&[("domain", domain)])
            .send()
            .await
            .expect("lookup request failed")
            .json()
            .await
            .expect("lookup body is not JSON")
    }

    pub async fn dashboard(&self) -> (u16, String) {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .expect("dashboard request failed");
        let status = response.status().as_u16();
        (status, response.text().await.expect("dashboard body"))
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
