//! Client for the upstream notes API.

pub mod notes;

pub use notes::{Note, NoteId};

use crate::error::ApiError;
use reqwest::{Response, Url};
use serde::Deserialize;
use std::time::Duration;

/// Every body the notes API sends is wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    // absent and null both land here as None
    pub data: Option<T>,
}

#[derive(Debug, Clone)]
pub struct NoteClient {
    http: reqwest::Client,
    base: Url,
}

impl NoteClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    /// A trailing empty segment yields a trailing slash.
    ///
    /// `.` and `..` cannot be sent as a single segment: URL parsers resolve
    /// them, encoded or not, so they are refused.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::DotSegment(dot.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and fails on any non-success status.
    async fn get(&self, url: Url) -> Result<Response, ApiError> {
        tracing::debug!(%url, "Fetching from notes API");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}
