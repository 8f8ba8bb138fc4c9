//! Wiring: handler chain construction and the main run loop.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::commands::Command;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, WebAppDataHandler};
use crate::web_app::WebAppLinks;

/// Commands first, then web-app data. Both answer Continue for messages they do not own.
pub fn build_handler_chain(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let links = WebAppLinks::new(config.webapp_url.clone());
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(bot.clone(), links, bot_username)))
        .add_handler(Arc::new(WebAppDataHandler::new(bot, config.bot_secret.clone())))
}

/// Main entry: validate config, init logging, register the command menu, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file.as_str()))?;

    info!(
        webapp_url = %config.webapp_url,
        telegram_api_url = ?config.telegram_api_url,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram().build_bot();
    if let Err(e) = teloxide_bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command menu");
    }

    let bot_username = Arc::new(RwLock::new(None));
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config, adapter, bot_username.clone());

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, bot_username).await
}
