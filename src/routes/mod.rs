pub mod index;
pub mod not_found;
pub mod notes;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// A plain `302 Found` pointing at `location`.
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
