use async_trait::async_trait;
use iplookup_domain::DomainError;

#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn load(&self) -> Result<String, DomainError>;
}
