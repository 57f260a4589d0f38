use crate::error::AppError;
use crate::template_context::CatchAllProps;
use crate::templates::render;
use axum::{extract::Path, response::Html};
use minijinja::Value;

/// `/notes/{a}/{b}/...`, anything under `/notes` deeper than one segment.
pub async fn route_catch_all(
    Path((first, rest)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let props = CatchAllProps::from_segments(first, &rest);
    tracing::debug!("Catch all: {:?}", props.params);

    Ok(Html(render("body/notes/catch_all.html", Value::from_serialize(&props))?))
}
