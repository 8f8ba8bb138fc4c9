//! Command handler: answers /start, /generate, /profile and /help.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::commands::Command;
use crate::web_app::WebAppLinks;

/// Replies to recognized commands with a single web-app button (or the help text).
/// Anything that is not a command for this bot passes through as Continue.
#[derive(Clone)]
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    links: WebAppLinks,
    /// Filled by the runner from get_me; `/cmd@name` is only accepted for this name.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, links: WebAppLinks, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            bot,
            links,
            bot_username,
        }
    }

    async fn parse(&self, text: &str) -> Option<Command> {
        let username = self.bot_username.read().await;
        Command::parse(text, username.as_deref().unwrap_or_default()).ok()
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text {
            return Ok(HandlerResponse::Continue);
        }
        let Some(command) = self.parse(&message.content).await else {
            return Ok(HandlerResponse::Continue);
        };

        info!(user_id = message.user.id, command = ?command, "Handling command");

        let text = command.text();
        match command.page() {
            Some(page) => {
                self.bot
                    .send_web_app_button(&message.chat, text, &self.links.button(page))
                    .await?
            }
            None => self.bot.reply_to(message, text).await?,
        }

        Ok(HandlerResponse::Reply(text.to_string()))
    }
}
