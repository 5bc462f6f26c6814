use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

pub type WebResult<T> = std::result::Result<T, WebError>;

/// Errors escaping a handler.
///
/// Validation failures and not-found outcomes are handled inside the
/// handlers (form re-render or flash redirect); whatever reaches this type
/// is a genuine server-side failure.
#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Core(#[from] poseidon_core::Error),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        let body = Html(
            "<!DOCTYPE html><html><head><title>Poseidon</title></head>\
             <body><h1>Something went wrong</h1>\
             <p>The request could not be completed. Please try again.</p>\
             <p><a href=\"/\">Back to the application</a></p></body></html>"
                .to_string(),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
