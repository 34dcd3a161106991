use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use iplookup_domain::DomainError;
use tracing::error;

/// Failure of a non-JSON endpoint. Lookup failures never get here; they are
/// answered in-band by the lookup handler.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            DomainError::TemplateLoad(_) | DomainError::TemplateRender(_) => {
                "dashboard unavailable"
            }
            _ => "internal error",
        };
        error!(error = %self.0, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
