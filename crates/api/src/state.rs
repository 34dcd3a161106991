use iplookup_application::use_cases::{RenderDashboardUseCase, ResolveDomainUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub render_dashboard: Arc<RenderDashboardUseCase>,
}
