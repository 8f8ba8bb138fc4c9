//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on what would have been sent without hitting Telegram.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Result, WebAppButton};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, url: String, caption: String },
    WebAppButton { chat_id: i64, text: String, button: WebAppButton },
}

/// Mock Bot that forwards each call as [`Sent`] to a channel; optionally fails every send.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<Sent>,
    fail: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Sent>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: false }), sent_rx)
    }

    /// A MockBot whose sends all fail like an unreachable Telegram API.
    #[allow(dead_code)]
    pub fn failing() -> Arc<Self> {
        let (sent_tx, _) = mpsc::unbounded_channel();
        Arc::new(Self { sent_tx, fail: true })
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail {
            return Err(DbotError::Bot("network unreachable".to_string()));
        }
        let _ = self.sent_tx.send(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()> {
        self.record(Sent::Photo {
            chat_id: chat.id,
            url: photo_url.to_string(),
            caption: caption.to_string(),
        })
    }

    async fn send_web_app_button(&self, chat: &Chat, text: &str, button: &WebAppButton) -> Result<()> {
        self.record(Sent::WebAppButton {
            chat_id: chat.id,
            text: text.to_string(),
            button: button.clone(),
        })
    }
}

/// Drains everything recorded so far.
#[allow(dead_code)]
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Sent>) -> Vec<Sent> {
    let mut out = Vec::new();
    while let Ok(sent) = rx.try_recv() {
        out.push(sent);
    }
    out
}
