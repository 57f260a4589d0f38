use crate::templates::{handle_template_error, render};
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::context;

pub fn not_found_page() -> Response {
    let rendered =
        render("body/not_found.html", context! {}).unwrap_or_else(handle_template_error);
    (StatusCode::NOT_FOUND, Html(rendered)).into_response()
}

/// Where a trailing-slash URL should live, e.g. `/notes/1/` → `/notes/1`.
///
/// `None` for `/` itself and for anything that would become a
/// scheme-relative `//host` location.
fn canonical_location(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if !path.ends_with('/') {
        return None;
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return None;
    }

    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_string(),
    })
}

pub async fn route_not_found(uri: Uri) -> Response {
    if let Some(location) = canonical_location(&uri) {
        tracing::debug!("Redirecting {uri} to {location}");
        return Redirect::permanent(&location).into_response();
    }

    tracing::debug!("No route for {uri}");
    not_found_page()
}
