use async_trait::async_trait;
use iplookup_application::ports::HeartbeatSender;
use iplookup_domain::{DomainError, Heartbeat};
use std::time::Duration;
use tracing::debug;

const HEARTBEAT_PATH: &str = "/heartbeat";

/// Collector URL for a configured address. A bare `host:port` becomes
/// `http://host:port/heartbeat`; a value with a scheme is used as given.
pub fn heartbeat_endpoint(address: &str) -> String {
    let address = address.trim();
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}{}", address.trim_end_matches('/'), HEARTBEAT_PATH)
    }
}

/// Posts heartbeats as JSON to the monitoring collector.
pub struct HttpHeartbeatSender {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpHeartbeatSender {
    pub fn new(address: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("iplookup/", env!("CARGO_PKG_VERSION"), " (heartbeat)"))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Heartbeat(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: heartbeat_endpoint(address),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HeartbeatSender for HttpHeartbeatSender {
    async fn send(&self, beat: &Heartbeat) -> Result<(), DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(beat)
            .send()
            .await
            .map_err(|e| DomainError::Heartbeat(format!("{}: {}", self.endpoint, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::Heartbeat(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                self.endpoint
            )));
        }

        debug!(endpoint = %self.endpoint, "Heartbeat accepted by collector");
        Ok(())
    }
}
