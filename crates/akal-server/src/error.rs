use akal_core::AkalError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Request-level failure returned by the HTTP handlers
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AkalError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a AkalError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else if self.0.is_upstream_error() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "collection request failed");
        } else {
            tracing::debug!(error = %self.0, "rejected collection request");
        }

        (status, Json(ErrorBody { error: &self.0 })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AkalError::InvalidInput("nr".to_string()), StatusCode::BAD_REQUEST),
            (AkalError::UpstreamStatus(500), StatusCode::BAD_GATEWAY),
            (AkalError::MalformedDocument("empty".to_string()), StatusCode::BAD_GATEWAY),
            (AkalError::NotPeriodical("row".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError(error).status_code(), expected);
        }
    }

    #[test]
    fn test_error_body() {
        let body = serde_json::to_string(&ErrorBody {
            error: &AkalError::UpstreamStatus(503),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"Upstream returned HTTP 503"}"#);
    }
}
