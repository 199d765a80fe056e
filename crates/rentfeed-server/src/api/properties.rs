use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use rentfeed_core::{ResponseEnvelope, ServiceConfig};
use rentfeed_generate::{GenerationError, generate_records};

use crate::constants::{SECRET_KEY_HEADER, SECRET_PASSWORD_HEADER};
use crate::credentials::{self, CredentialError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("security violation: {0}")]
    Credential(#[from] CredentialError),
    #[error("server error: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Credential failures keep the upstream API's observed 404 mapping
        // rather than 401/403.
        let status = match &self {
            ApiError::Credential(reason) => {
                tracing::warn!(error = %reason, "credential validation failed");
                StatusCode::NOT_FOUND
            }
            ApiError::Generation(reason) => {
                tracing::error!(error = %reason, "record generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ResponseEnvelope::failure())).into_response()
    }
}

/// Validates the shared-secret header pair, then synthesizes the configured
/// number of records. The request body is ignored.
#[tracing::instrument(skip_all)]
pub async fn generate_properties(
    State(config): State<Arc<ServiceConfig>>,
    headers: HeaderMap,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let secret_key = header_str(&headers, SECRET_KEY_HEADER);
    let secret_password = header_str(&headers, SECRET_PASSWORD_HEADER);
    credentials::validate(&config, secret_key, secret_password)?;

    let records = generate_records(config.records_per_request, &mut rand::rng())?;
    tracing::info!(count = records.len(), "generated property records");
    Ok(Json(ResponseEnvelope::success(records)))
}

/// Header values that are not valid UTF-8 count as absent, which the
/// validator reports as missing credentials.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
