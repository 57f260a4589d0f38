use super::{Envelope, NoteClient};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a note as the notes API hands it out.
///
/// The upstream is free to use numbers or strings, so both are accepted and
/// rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(id) => write!(f, "{id}"),
            NoteId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
}

impl NoteClient {
    /// `GET {api}/api/note/`
    ///
    /// Any failure is an error here, including a body without `data`.
    pub async fn fetch_notes(&self) -> Result<Vec<Note>, ApiError> {
        let url = self.endpoint(&["api", "note", ""])?;
        let response = self.get(url.clone()).await?;

        let envelope: Envelope<Vec<Note>> = response.json().await?;
        envelope.data.ok_or(ApiError::MissingData {
            url: url.to_string(),
        })
    }

    /// `GET {api}/api/note/{id}`
    ///
    /// Returns `Ok(None)` when the API answered successfully but sent no
    /// `data`. A non-success status comes back as [`ApiError::Status`].
    pub async fn fetch_note(&self, id: &str) -> Result<Option<Note>, ApiError> {
        let url = self.endpoint(&["api", "note", id])?;
        let response = self.get(url).await?;

        let envelope: Envelope<Note> = response.json().await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{StatusCode, Url};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NoteClient {
        let base = Url::parse(&server.uri()).unwrap();
        NoteClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn note_id_accepts_numbers_and_strings() {
        let numeric: Note = serde_json::from_value(json!({"id": 1, "title": "A"})).unwrap();
        let textual: Note = serde_json::from_value(json!({"id": "abc", "title": "B"})).unwrap();

        assert_eq!(numeric.id, NoteId::Int(1));
        assert_eq!(numeric.id.to_string(), "1");
        assert_eq!(textual.id, NoteId::Text(String::from("abc")));
        assert_eq!(textual.id.to_string(), "abc");
    }

    #[test]
    fn unknown_note_fields_are_ignored() {
        let note: Note = serde_json::from_value(json!({
            "id": 3,
            "title": "Groceries",
            "content": "eggs",
            "created_at": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(note.title, "Groceries");
    }

    #[tokio::test]
    async fn fetch_notes_keeps_upstream_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": 2, "title": "second"},
                    {"id": 1, "title": "first"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let notes = client_for(&server).fetch_notes().await.unwrap();

        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn fetch_notes_without_data_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_notes().await.unwrap_err();

        assert!(matches!(err, ApiError::MissingData { .. }));
    }

    #[tokio::test]
    async fn fetch_notes_reports_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_notes().await.unwrap_err();

        match err {
            ApiError::Status { status, .. } => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_notes_rejects_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_notes().await.unwrap_err();

        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn fetch_note_returns_the_data_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": 7, "title": "Seven"}})),
            )
            .mount(&server)
            .await;

        let note = client_for(&server).fetch_note("7").await.unwrap();

        assert_eq!(
            note,
            Some(Note {
                id: NoteId::Int(7),
                title: String::from("Seven"),
            })
        );
    }

    #[tokio::test]
    async fn fetch_note_with_null_data_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .mount(&server)
            .await;

        let note = client_for(&server).fetch_note("7").await.unwrap();

        assert_eq!(note, None);
    }

    #[tokio::test]
    async fn fetch_note_encodes_the_id_as_one_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/note/a%20b"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": "a b", "title": "Spaced"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let note = client_for(&server).fetch_note("a b").await.unwrap();

        assert_eq!(note.map(|n| n.title), Some(String::from("Spaced")));
    }
}
