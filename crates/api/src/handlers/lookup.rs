use crate::dto::{LookupParams, LookupResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use iplookup_domain::DomainError;
use tracing::{debug, instrument};

/// `GET /service/ip?domain=<name>`. Always answers 200; failures are
/// reported in the body.
#[instrument(skip_all, name = "api_lookup_domain")]
pub async fn lookup_domain(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<LookupResponse> {
    let params = LookupParams::from_pairs(pairs);

    match state.resolve_domain.execute(&params.domain).await {
        Ok(ips) => Json(LookupResponse::found(ips)),
        Err(DomainError::EmptyDomain) => Json(LookupResponse::empty_domain()),
        Err(e) => {
            debug!(domain = %params.domain, error = %e, "Lookup failed");
            Json(LookupResponse::invalid_domain())
        }
    }
}
