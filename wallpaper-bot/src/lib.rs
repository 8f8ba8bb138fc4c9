//! # Sacred Wallpaper bot
//!
//! Telegram front end for the Sacred Wallpaper Pack web app. Commands answer with a button that opens the
//! web app; signed data sent back from the web app is authenticated with [`webapp_auth`] and relayed to the chat.
//! Wires dbot-core (Bot, Handler), handler-chain and dbot-telegram (adapters, REPL).

pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod payload;
pub mod runner;
pub mod web_app;

pub use cli::{load_config, signed_query, Cli, Commands};
pub use commands::Command;
pub use config::BotConfig;
pub use handlers::{CommandHandler, WebAppDataHandler};
pub use payload::{RelayError, WallpaperShare, WebAppPayload};
pub use runner::{build_handler_chain, run_bot};
pub use web_app::{WebAppLinks, WebAppPage};
