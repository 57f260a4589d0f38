use crate::error::AppError;
use crate::templates::render;
use axum::response::Html;
use minijinja::context;

pub async fn route_index() -> Result<Html<String>, AppError> {
    Ok(Html(render("body/index.html", context! {})?))
}
