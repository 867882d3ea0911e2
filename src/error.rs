//! Error types for startup and request handling.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::ui::pages;

/// Errors that can stop the application from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Telemetry(String),

    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors produced while resolving a page request.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A route parameter did not match the expected shape.
    #[error("Invalid route parameter `{name}`: {value:?}")]
    InvalidParam { name: &'static str, value: String },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected page request");
        (StatusCode::NOT_FOUND, Html(pages::not_found_document())).into_response()
    }
}
