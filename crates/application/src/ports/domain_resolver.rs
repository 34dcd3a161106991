use async_trait::async_trait;
use iplookup_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Resolve `domain` to its IPv4 and IPv6 addresses. An empty result is
    /// reported as an error, never as `Ok(vec![])`.
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError>;
}
