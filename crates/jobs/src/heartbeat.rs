use iplookup_application::use_cases::SendHeartbeatUseCase;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Periodically reports liveness to the monitoring collector.
///
/// The first beat goes out immediately on start. Failed beats are logged and
/// the loop keeps going; only cancellation stops it.
pub struct HeartbeatJob {
    send: Arc<SendHeartbeatUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
    delivered: AtomicU64,
    consecutive_failures: AtomicU64,
}

impl HeartbeatJob {
    pub fn new(send: Arc<SendHeartbeatUseCase>) -> Self {
        Self {
            send,
            interval_secs: 10,
            shutdown: CancellationToken::new(),
            delivered: AtomicU64::new(0),
            consecutive_failures: AtomicU64::new(0),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn consecutive_failures(&self) -> u64 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting heartbeat job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HeartbeatJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.beat_once().await;
                    }
                }
            }
        })
    }

    async fn beat_once(&self) {
        match self.send.execute().await {
            Ok(beat) => {
                self.delivered.fetch_add(1, Ordering::Relaxed);
                let previous_failures = self.consecutive_failures.swap(0, Ordering::Relaxed);
                if previous_failures > 0 {
                    info!(previous_failures, "Heartbeat collector reachable again");
                }
                debug!(uptime_secs = beat.uptime_secs, "Heartbeat sent");
            }
            Err(e) => {
                let failures = self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1;
                warn!(error = %e, consecutive_failures = failures, "Heartbeat failed");
            }
        }
    }
}
