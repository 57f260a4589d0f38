use crate::error::AppError;
use crate::flash::take_flash_for_render;
use crate::state::AppState;
use crate::template_context::load_note_list;
use crate::templates::render;
use axum::{extract::State, response::Html};
use minijinja::{context, Value};
use tower_sessions::Session;

pub async fn route_notes(
    session: Session,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let props = load_note_list(&state.api).await?;

    let flash = take_flash_for_render(&session).await;

    let ctx = context! {
        flash => flash,
        ..Value::from_serialize(&props)
    };

    Ok(Html(render("body/notes/list.html", ctx)?))
}
