use async_trait::async_trait;
use iplookup_domain::{DomainError, Heartbeat};

#[async_trait]
pub trait HeartbeatSender: Send + Sync {
    async fn send(&self, beat: &Heartbeat) -> Result<(), DomainError>;
}
