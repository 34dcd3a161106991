use crate::{BuildInfo, QueryRecord};

/// Render context for the dashboard page, built fresh per request.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub build: BuildInfo,
    pub queries: Vec<QueryRecord>,
}

impl DashboardPage {
    pub fn new(build: BuildInfo, queries: Vec<QueryRecord>) -> Self {
        Self { build, queries }
    }

    pub fn query_count(&self) -> usize {
        self.queries.len()
    }
}
