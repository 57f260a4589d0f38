use crate::templates::render_error_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API URL `{0}` cannot be used as a base URL")]
    InvalidBaseUrl(String),

    #[error("request to the notes API failed")]
    Request(#[from] reqwest::Error),

    #[error("`{0}` cannot be sent as a notes API path segment")]
    DotSegment(String),

    #[error("notes API answered {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("notes API response from {url} has no `data` field")]
    MissingData { url: String },
}

/// Failures a page handler cannot recover from. These become the generic
/// failure page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load page data")]
    Api(#[from] ApiError),

    #[error("failed to render template")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log_error_chain(&self);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error_page())).into_response()
    }
}

/// Logs an error along with every `source()` below it.
pub fn log_error_chain(err: &(dyn std::error::Error + 'static)) {
    tracing::error!("{err}");
    let mut err = err;
    while let Some(next_err) = err.source() {
        tracing::error!("caused by: {next_err}");
        err = next_err;
    }
}
