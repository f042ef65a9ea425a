use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use eventlog_core::storage::{source_error_to_status_code, SourceError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(source_error) = self.0.downcast_ref::<SourceError>() {
            let code = source_error_to_status_code(source_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(status = %status_code, error = %self.0, "Request failed");

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Error response with message, for client mistakes.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(status = %status, message = %message, "API error");
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_unavailable_source_is_503() {
        let error = AppError::from(SourceError::Unavailable("timed out".to_string()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Row source unavailable: timed out");
    }

    #[tokio::test]
    async fn test_source_status_is_502() {
        let error = AppError::from(SourceError::Status {
            status: 429,
            message: "quota exceeded".to_string(),
        });

        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_other_errors_are_500() {
        let error = AppError(anyhow::anyhow!("boom"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "boom");
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = error_response(StatusCode::NOT_FOUND, "Event not found");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Event not found");
    }
}
