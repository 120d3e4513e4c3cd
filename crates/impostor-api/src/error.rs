//! VocabImpostor — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use impostor_core::error::GameError;
use serde::Serialize;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `GameError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            GameError::UnknownCategory(_) => (StatusCode::NOT_FOUND, "unknown_category"),
            GameError::NoCategorySelected => (StatusCode::CONFLICT, "no_category_selected"),
            GameError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            GameError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: GameError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_unknown_category_maps_to_404() {
        assert_eq!(
            status_of(GameError::UnknownCategory("nope".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_no_category_selected_maps_to_409() {
        assert_eq!(status_of(GameError::NoCategorySelected), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(GameError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(GameError::Infrastructure("lock poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
