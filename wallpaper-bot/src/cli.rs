//! CLI parser, config loading and the `sign` helper.

use anyhow::Result;
use clap::{Parser, Subcommand};
use url::form_urlencoded;
use webapp_auth::SharedSecret;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "wallpaper-bot")]
#[command(about = "Sacred Wallpaper Pack Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print a signed web-app data string for the given key=value fields (secret from BOT_SECRET unless given).
    Sign {
        #[arg(required = true, value_parser = parse_field)]
        fields: Vec<(String, String)>,
        #[arg(short, long)]
        secret: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// `key=value` argument, split on its first `=`; [`signed_query`] encodes any further `=`.
fn parse_field(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("empty key in `{}`", s)),
        Some((key, _)) if key == "hash" => Err("`hash` is computed, not given".to_string()),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got `{}`", s)),
    }
}

/// Form-encodes each value, signs the encoded tokens and appends their `hash`, ready to be
/// checked by [`webapp_auth::validate`]. Encoding keeps `&` and `=` out of every value.
pub fn signed_query(fields: &[(String, String)], secret: &SharedSecret) -> Result<String> {
    let encoded: Vec<(String, String)> = fields
        .iter()
        .map(|(key, value)| (encode(key), encode(value)))
        .collect();
    let hash = webapp_auth::sign(encoded.iter().map(|(k, v)| (k.as_str(), v.as_str())), secret)?;
    let mut tokens: Vec<String> = encoded.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    tokens.push(format!("hash={}", hash));
    Ok(tokens.join("&"))
}

fn encode(part: &str) -> String {
    form_urlencoded::byte_serialize(part.as_bytes()).collect()
}
