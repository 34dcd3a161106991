use async_trait::async_trait;
use iplookup_domain::{DomainError, QueryRecord};

/// Append-only log of completed lookups.
///
/// Appends are exclusive with each other and with snapshots; a snapshot is
/// always a fully formed prefix of the appends, in arrival order.
#[async_trait]
pub trait QueryLogRepository: Send + Sync {
    async fn append(&self, record: QueryRecord) -> Result<(), DomainError>;
    async fn snapshot(&self) -> Result<Vec<QueryRecord>, DomainError>;
    async fn len(&self) -> Result<usize, DomainError>;
}
