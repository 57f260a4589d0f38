use crate::error::AppError;
use crate::flash::{FlashMessage, FlashMessageStore};
use crate::routes::{not_found::not_found_page, redirect_found};
use crate::state::AppState;
use crate::template_context::{load_note, PageData};
use crate::templates::render;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use minijinja::Value;
use tower_sessions::Session;

pub async fn route_note(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match load_note(&state.api, &id).await? {
        PageData::Props(props) => {
            let rendered = render("body/notes/read.html", Value::from_serialize(&props))?;
            Ok(Html(rendered).into_response())
        }
        PageData::Redirect(location) => {
            session
                .set_flash(FlashMessage::error(format!("Note {id} not found")))
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to set flash message: {:#?}", e);
                });

            Ok(redirect_found(&location))
        }
        PageData::NotFound => Ok(not_found_page()),
    }
}
