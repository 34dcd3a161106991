use crate::ports::{DomainResolver, QueryLogRepository};
use iplookup_domain::{DomainError, QueryRecord};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Use case: resolve a domain and record the lookup in the query log.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DomainResolver>,
    query_log: Arc<dyn QueryLogRepository>,
    record_failures: bool,
}

impl ResolveDomainUseCase {
    pub fn new(
        resolver: Arc<dyn DomainResolver>,
        query_log: Arc<dyn QueryLogRepository>,
    ) -> Self {
        Self {
            resolver,
            query_log,
            record_failures: false,
        }
    }

    /// Also log failed lookups, with an empty address list.
    pub fn with_record_failures(mut self, record_failures: bool) -> Self {
        self.record_failures = record_failures;
        self
    }

    /// Returns `DomainError::EmptyDomain` without touching the resolver when
    /// `domain` is empty. A failure to append to the log is reported but
    /// does not change the lookup result.
    #[instrument(skip(self), name = "resolve_domain")]
    pub async fn execute(&self, domain: &str) -> Result<Vec<IpAddr>, DomainError> {
        if domain.is_empty() {
            return Err(DomainError::EmptyDomain);
        }

        match self.resolver.lookup(domain).await {
            Ok(addresses) => {
                debug!(count = addresses.len(), "Domain resolved");
                self.record(QueryRecord::new(domain, addresses.clone())).await;
                Ok(addresses)
            }
            Err(e) => {
                debug!(error = %e, "Domain resolution failed");
                if self.record_failures {
                    self.record(QueryRecord::failed(domain)).await;
                }
                Err(e)
            }
        }
    }

    async fn record(&self, record: QueryRecord) {
        if let Err(e) = self.query_log.append(record).await {
            error!(error = %e, "Failed to append to query log");
        }
    }
}
