//! Per-page data loaders.
//!
//! Each loader runs before its page is rendered, talks to the notes API at
//! most once, and tells the router what to do next: render with props,
//! redirect, or answer not-found.

use crate::api::{Note, NoteClient};
use crate::error::ApiError;
use serde::Serialize;

pub const NOTES_PATH: &str = "/notes";

#[derive(Debug, Clone, PartialEq)]
pub enum PageData<P> {
    Props(P),
    Redirect(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteListProps {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteProps {
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchAllProps {
    pub params: Vec<String>,
}

impl CatchAllProps {
    /// `first` is the segment right after `/notes/`, `rest` whatever the
    /// wildcard captured after it.
    pub fn from_segments(first: String, rest: &str) -> Self {
        let params = std::iter::once(first)
            .chain(
                rest.split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(String::from),
            )
            .collect();
        Self { params }
    }
}

/// Data for `/notes`. Every failure propagates.
pub async fn load_note_list(api: &NoteClient) -> Result<NoteListProps, ApiError> {
    let notes = api.fetch_notes().await?;
    tracing::debug!("Loaded {} notes", notes.len());
    Ok(NoteListProps { notes })
}

/// Data for `/notes/{id}`.
///
/// A non-success answer sends the visitor back to the list. A success
/// without `data`, or an id the API cannot be asked about, is reported as
/// not-found.
pub async fn load_note(api: &NoteClient, id: &str) -> Result<PageData<NoteProps>, ApiError> {
    match api.fetch_note(id).await {
        Ok(Some(note)) => Ok(PageData::Props(NoteProps { note })),
        Ok(None) => {
            tracing::info!("Notes API returned no data for note {id}");
            Ok(PageData::NotFound)
        }
        Err(ApiError::DotSegment(segment)) => {
            tracing::info!("Note id {segment:?} is not addressable upstream");
            Ok(PageData::NotFound)
        }
        Err(ApiError::Status { status, url }) => {
            tracing::info!("Notes API answered {status} for {url}, redirecting to {NOTES_PATH}");
            Ok(PageData::Redirect(String::from(NOTES_PATH)))
        }
        Err(e) => Err(e),
    }
}
