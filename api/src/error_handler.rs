use answerer::AnswerError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use post_store::PostStoreError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("config error: {0}")]
    Config(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert common Axum rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Convert `AnswerError` to `AppError::Http` with precise HTTP status & code.
///
/// Snapshot problems are reported as 503 (the corpus is a hard dependency
/// the operator can fix), upstream LLM failures as 502.
impl From<AnswerError> for AppError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::Store(store_err) => match store_err {
                PostStoreError::SnapshotMissing(src) => AppError::Http {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    code: "SNAPSHOT_UNAVAILABLE",
                    message: format!("No snapshot data found at {src}."),
                },
                PostStoreError::Io(e) => AppError::Http {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    code: "SNAPSHOT_UNAVAILABLE",
                    message: format!("Failed to read the snapshot: {e}"),
                },
                PostStoreError::Http(e) => AppError::Http {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    code: "SNAPSHOT_UNAVAILABLE",
                    message: format!("Failed to fetch the snapshot: {e}"),
                },
                PostStoreError::HttpStatus { status, url, .. } => AppError::Http {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    code: "SNAPSHOT_UNAVAILABLE",
                    message: format!("Snapshot endpoint {url} returned {status}."),
                },
                PostStoreError::Parse(e) => AppError::Http {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "SNAPSHOT_INVALID",
                    message: format!("Snapshot blob could not be parsed: {e}"),
                },
                PostStoreError::Config(msg) => AppError::Config(msg),
                PostStoreError::Internal(e) => AppError::Http {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "INTERNAL",
                    message: e.to_string(),
                },
            },
            AnswerError::Llm(e) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "LLM_UPSTREAM",
                message: e.to_string(),
            },
            AnswerError::Json(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "INTERNAL",
                message: e.to_string(),
            },
            AnswerError::Io(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "INTERNAL",
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_missing_maps_to_503() {
        let err: AppError =
            AnswerError::Store(PostStoreError::SnapshotMissing("file:/tmp/x".into())).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "SNAPSHOT_UNAVAILABLE");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("question is required".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }
}
