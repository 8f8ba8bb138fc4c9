//! Bot abstraction for outgoing messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single button that opens a page of the embedded web application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppButton {
    pub label: String,
    /// Absolute URL of the web-app page; validated by the transport when sending.
    pub url: String,
}

impl WebAppButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a photo referenced by URL, with a caption.
    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()>;

    /// Sends `text` with a single inline button that opens the embedded web app.
    async fn send_web_app_button(&self, chat: &Chat, text: &str, button: &WebAppButton) -> Result<()>;
}
