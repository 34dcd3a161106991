use async_trait::async_trait;
use iplookup_application::ports::QueryLogRepository;
use iplookup_domain::{DomainError, QueryRecord};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Process-lifetime query log.
///
/// Every append takes the write lock, so appends never interleave and a
/// snapshot (taken under the read lock) is always a complete prefix.
/// Nothing is ever removed.
pub struct InMemoryQueryLogRepository {
    records: RwLock<Vec<QueryRecord>>,
}

impl InMemoryQueryLogRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryQueryLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryLogRepository for InMemoryQueryLogRepository {
    #[instrument(skip(self, record), fields(domain = %record.domain))]
    async fn append(&self, record: QueryRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.push(record);
        debug!(total = records.len(), "Query recorded");
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<QueryRecord>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
