//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result, WebAppButton};
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, WebAppInfo},
};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn parse_url(kind: &str, url: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(url).map_err(|e| DbotError::Bot(format!("Invalid {} url {}: {}", kind, url, e)))
}

/// One-row inline keyboard with a single web-app button.
pub(crate) fn web_app_keyboard(button: &WebAppButton) -> Result<InlineKeyboardMarkup> {
    let url = parse_url("web app", &button.url)?;
    Ok(InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::web_app(button.label.clone(), WebAppInfo { url }),
    ]]))
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()> {
        let url = parse_url("photo", photo_url)?;
        self.bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .caption(caption.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_web_app_button(&self, chat: &Chat, text: &str, button: &WebAppButton) -> Result<()> {
        let keyboard = web_app_keyboard(button)?;
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
