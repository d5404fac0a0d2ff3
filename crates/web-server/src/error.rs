use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Converts our custom `AppError` into an HTML error page. Internal details
/// are logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No route matched.");
                (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Unhandled server error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}
