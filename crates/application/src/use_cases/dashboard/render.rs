use crate::ports::{QueryLogRepository, TemplateSource};
use crate::services::PageRenderer;
use iplookup_domain::{BuildInfo, DashboardPage, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: render the dashboard page from the current query log.
///
/// The template is loaded on every call, so edits to the file show up
/// without a restart.
pub struct RenderDashboardUseCase {
    query_log: Arc<dyn QueryLogRepository>,
    templates: Arc<dyn TemplateSource>,
    build: BuildInfo,
}

impl RenderDashboardUseCase {
    pub fn new(
        query_log: Arc<dyn QueryLogRepository>,
        templates: Arc<dyn TemplateSource>,
        build: BuildInfo,
    ) -> Self {
        Self {
            query_log,
            templates,
            build,
        }
    }

    #[instrument(skip(self), name = "render_dashboard")]
    pub async fn execute(&self) -> Result<String, DomainError> {
        let template = self.templates.load().await?;
        let queries = self.query_log.snapshot().await?;

        debug!(queries = queries.len(), "Rendering dashboard");

        let page = DashboardPage::new(self.build.clone(), queries);
        PageRenderer::render(&template, &page)
    }
}
