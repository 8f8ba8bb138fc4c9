//! Web-app data handler: authenticates data sent back by the web app and relays wallpapers to the chat.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use webapp_auth::SharedSecret;

use crate::payload::{RelayError, WebAppPayload};

pub const INVALID_DATA_TEXT: &str = "❌ Invalid data received.";
pub const UNKNOWN_TYPE_TEXT: &str = "❌ Unknown data type received.";

fn processing_error_text(e: &RelayError) -> String {
    format!("❌ Error processing WebApp data: {}", e)
}

/// Handles [`MessageKind::WebAppData`] messages; everything else passes through as Continue.
///
/// Unauthenticated data gets one generic rejection, whatever the cause. Authenticated data that cannot be
/// decoded gets a detailed error, since the sender is already trusted.
#[derive(Clone)]
pub struct WebAppDataHandler {
    bot: Arc<dyn Bot>,
    secret: SharedSecret,
}

impl WebAppDataHandler {
    pub fn new(bot: Arc<dyn Bot>, secret: SharedSecret) -> Self {
        Self { bot, secret }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for WebAppDataHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::WebAppData {
            return Ok(HandlerResponse::Continue);
        }

        let Ok(auth) = webapp_auth::authenticate(&message.content, &self.secret) else {
            warn!(user_id = message.user.id, "Rejected unauthenticated web app data");
            return self.reply(message, INVALID_DATA_TEXT.to_string()).await;
        };

        match WebAppPayload::from_auth(&auth) {
            Ok(WebAppPayload::Wallpaper(share)) => {
                let caption = share.photo_caption();
                info!(user_id = message.user.id, url = %share.url, "Relaying wallpaper");
                self.bot.send_photo(&message.chat, &share.url, &caption).await?;
                Ok(HandlerResponse::Reply(caption))
            }
            Ok(WebAppPayload::Unknown) => {
                info!(user_id = message.user.id, "Unknown web app data type");
                self.reply(message, UNKNOWN_TYPE_TEXT.to_string()).await
            }
            Err(e) => {
                warn!(user_id = message.user.id, error = %e, "Authenticated web app data could not be decoded");
                self.reply(message, processing_error_text(&e)).await
            }
        }
    }
}
