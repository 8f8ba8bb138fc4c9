//! Handlers: command dispatch and web-app data relay.

mod command_handler;
mod web_app_data_handler;

pub use command_handler::CommandHandler;
pub use web_app_data_handler::{WebAppDataHandler, INVALID_DATA_TEXT, UNKNOWN_TYPE_TEXT};
