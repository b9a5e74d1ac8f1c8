use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tasks_api::v1::MAX_TITLE_LEN;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("task with id {0} not found")]
    TaskNotFound(i64),

    #[error("invalid status {0:?} stored for task")]
    CorruptStatus(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::EmptyTitle | Error::TitleTooLong => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::TaskNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Error::CorruptStatus(_) | Error::Database(_) => {
                tracing::error!("store error: {self:?}");
                let message = String::from("internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
