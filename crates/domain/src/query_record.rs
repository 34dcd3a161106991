use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::sync::Arc;

/// One completed lookup. Immutable once created; `Arc` fields keep the
/// snapshot clones taken by the dashboard cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub domain: Arc<str>,
    pub addresses: Arc<[IpAddr]>,
    pub recorded_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(domain: impl Into<Arc<str>>, addresses: Vec<IpAddr>) -> Self {
        Self {
            domain: domain.into(),
            addresses: addresses.into(),
            recorded_at: Utc::now(),
        }
    }

    /// Record of a lookup that produced no addresses.
    pub fn failed(domain: impl Into<Arc<str>>) -> Self {
        Self::new(domain, Vec::new())
    }

    pub fn is_failure(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn joined_addresses(&self, separator: &str) -> String {
        self.addresses
            .iter()
            .map(IpAddr::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
