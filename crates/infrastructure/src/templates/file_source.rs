use async_trait::async_trait;
use iplookup_application::ports::TemplateSource;
use iplookup_domain::DomainError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads the dashboard template from disk on every load.
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn load(&self) -> Result<String, DomainError> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::TemplateLoad(format!("{}: {}", self.path.display(), e)))
    }
}
