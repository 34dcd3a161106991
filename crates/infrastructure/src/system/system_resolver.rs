use async_trait::async_trait;
use iplookup_application::ports::DomainResolver;
use iplookup_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves names through the operating system (`getaddrinfo`), the same
/// path every other program on the host uses, so `/etc/hosts` and the
/// configured search domains apply.
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }

    fn dedup_in_order(addresses: impl Iterator<Item = IpAddr>) -> Vec<IpAddr> {
        let mut out: Vec<IpAddr> = Vec::new();
        for ip in addresses {
            if !out.contains(&ip) {
                out.push(ip);
            }
        }
        out
    }
}

#[async_trait]
impl DomainResolver for SystemResolver {
    async fn lookup(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        if domain.contains('\0') {
            return Err(DomainError::InvalidDomainName(
                domain.escape_debug().to_string(),
            ));
        }

        // Port 0 only satisfies the socket-address API; it is never used.
        let lookup = tokio::net::lookup_host((domain, 0));
        let socket_addrs = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => {
                debug!(domain = %domain, error = %e, "System lookup failed");
                return Err(DomainError::ResolutionFailed(format!("{domain}: {e}")));
            }
            Err(_) => {
                debug!(
                    domain = %domain,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "System lookup timed out"
                );
                return Err(DomainError::ResolutionTimeout(domain.to_string()));
            }
        };

        // getaddrinfo returns one entry per socket type; keep each IP once.
        let addresses = Self::dedup_in_order(socket_addrs.map(|sa| sa.ip()));
        if addresses.is_empty() {
            return Err(DomainError::ResolutionFailed(format!(
                "{domain}: no addresses"
            )));
        }

        debug!(domain = %domain, count = addresses.len(), "System lookup succeeded");
        Ok(addresses)
    }
}
