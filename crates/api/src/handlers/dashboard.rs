use crate::errors::ApiError;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use tracing::instrument;

#[instrument(skip_all, name = "api_dashboard")]
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.render_dashboard.execute().await?;
    Ok(Html(page))
}
