//! Bot commands and the texts they answer with.

use teloxide::utils::command::BotCommands;

use crate::web_app::WebAppPage;

pub const WELCOME_TEXT: &str = "Welcome to Sacred Wallpaper Pack! 🌟\n\n\
Generate consciousness-optimizing wallpapers based on your biorhythms.\n\n\
Click the button below to start your journey.";

pub const GENERATE_TEXT: &str = "Click below to generate a new wallpaper:";

pub const PROFILE_TEXT: &str = "Click below to view your profile:";

pub const HELP_TEXT: &str = "🌟 Sacred Wallpaper Pack Commands:\n\n\
/start - Open the main menu\n\
/generate - Generate a new wallpaper\n\
/profile - View your profile\n\
/help - Show this help message";

/// Supported commands for the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Sacred Wallpaper Pack commands:")]
pub enum Command {
    #[command(description = "Open the main menu")]
    Start,
    #[command(description = "Generate a new wallpaper")]
    Generate,
    #[command(description = "View your profile")]
    Profile,
    #[command(description = "Show this help message")]
    Help,
}

impl Command {
    /// Web-app page the command opens; `None` for text-only answers.
    pub fn page(&self) -> Option<WebAppPage> {
        match self {
            Command::Start => Some(WebAppPage::Home),
            Command::Generate => Some(WebAppPage::Generate),
            Command::Profile => Some(WebAppPage::Profile),
            Command::Help => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Command::Start => WELCOME_TEXT,
            Command::Generate => GENERATE_TEXT,
            Command::Profile => PROFILE_TEXT,
            Command::Help => HELP_TEXT,
        }
    }
}
