use crate::ports::HeartbeatSender;
use iplookup_domain::{BuildInfo, DomainError, Heartbeat};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Use case: deliver one liveness beat to the collector.
/// Run periodically by the heartbeat job.
pub struct SendHeartbeatUseCase {
    sender: Arc<dyn HeartbeatSender>,
    build: BuildInfo,
    started_at: Instant,
}

impl SendHeartbeatUseCase {
    pub fn new(sender: Arc<dyn HeartbeatSender>, build: BuildInfo) -> Self {
        Self {
            sender,
            build,
            started_at: Instant::now(),
        }
    }

    pub async fn execute(&self) -> Result<Heartbeat, DomainError> {
        let beat = Heartbeat::new(self.build.as_str(), self.started_at.elapsed());
        self.sender.send(&beat).await?;

        debug!(uptime_secs = beat.uptime_secs, "Heartbeat delivered");
        Ok(beat)
    }
}
