use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use liftbook_shared::Error;
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] Error),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(Error::Validate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Domain(Error::LockedWeek) => StatusCode::CONFLICT,
            AppError::Domain(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(Error::Server(_)) => StatusCode::BAD_REQUEST,
            AppError::Domain(Error::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Domain(Error::Unknown(e)) => tracing::error!("store error: {e:?}"),
            AppError::Domain(Error::LockedWeek) | AppError::Unauthorized(_) => {
                tracing::warn!("{self}")
            }
            _ => tracing::debug!("{self}"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (Error::LockedWeek, StatusCode::CONFLICT),
            (Error::NotFound("plan"), StatusCode::NOT_FOUND),
            (
                Error::Server("Email already registered".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::Unknown(anyhow::anyhow!("disk I/O error")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(AppError::from(error).status_code(), status);
        }
    }

    #[tokio::test]
    async fn test_error_body_keeps_message() {
        let response = AppError::from(Error::LockedWeek).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value["error"],
            "This week is locked and cannot be edited."
        );
    }
}
