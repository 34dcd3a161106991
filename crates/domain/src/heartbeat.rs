use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

pub const SERVICE_NAME: &str = "iplookup";

/// Liveness beat posted to the monitoring collector.
#[derive(Debug, Clone, Serialize)]
pub struct Heartbeat {
    pub service: &'static str,
    pub build: String,
    pub uptime_secs: u64,
    pub sent_at: DateTime<Utc>,
}

impl Heartbeat {
    pub fn new(build: impl Into<String>, uptime: Duration) -> Self {
        Self {
            service: SERVICE_NAME,
            build: build.into(),
            uptime_secs: uptime.as_secs(),
            sent_at: Utc::now(),
        }
    }
}
