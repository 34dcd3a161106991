use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Empty domain parameter")]
    EmptyDomain,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Resolution timed out: {0}")]
    ResolutionTimeout(String),

    #[error("Failed to load template: {0}")]
    TemplateLoad(String),

    #[error("Failed to render template: {0}")]
    TemplateRender(String),

    #[error("Heartbeat delivery failed: {0}")]
    Heartbeat(String),

    #[error("Query log unavailable: {0}")]
    QueryLog(String),
}

impl DomainError {
    /// True for every failure that comes out of a lookup attempt, as opposed
    /// to input validation.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::ResolutionFailed(_)
                | DomainError::ResolutionTimeout(_)
        )
    }
}
