use serde::{Deserialize, Serialize};
use std::future::Future;
use tower_sessions::{session, Session};

const FLASH_KEY: &str = "flash";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: String, // styled as .flash-{kind}
    pub message: String,
}

impl FlashMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: String::from("error"),
            message: message.into(),
        }
    }
}

/// One-shot messages carried across a redirect in the visitor's session.
pub trait FlashMessageStore {
    fn set_flash(
        &self,
        flash: FlashMessage,
    ) -> impl Future<Output = Result<(), session::Error>> + Send;

    /// Removes the pending message, if any.
    fn take_flash(&self) -> impl Future<Output = Result<Option<FlashMessage>, session::Error>> + Send;
}

impl FlashMessageStore for Session {
    async fn set_flash(&self, flash: FlashMessage) -> Result<(), session::Error> {
        self.insert(FLASH_KEY, flash).await
    }

    async fn take_flash(&self) -> Result<Option<FlashMessage>, session::Error> {
        self.remove(FLASH_KEY).await
    }
}

/// Takes the pending flash for rendering. A broken session store only costs
/// the message, never the page.
pub async fn take_flash_for_render(session: &Session) -> Option<FlashMessage> {
    session.take_flash().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to take flash message: {:#?}", e);
        None
    })
}
