use crate::api::NoteClient;

#[derive(Clone)]
pub struct AppState {
    pub api: NoteClient,
}

impl AppState {
    pub fn new(api: NoteClient) -> Self {
        Self { api }
    }
}
