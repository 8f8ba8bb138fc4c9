//! Binary for the Sacred Wallpaper bot: `run` starts polling, `sign` prints a signed web-app data string.

use anyhow::Result;
use clap::Parser;
use wallpaper_bot::{config, load_config, run_bot, signed_query, Cli, Commands};
use webapp_auth::SharedSecret;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Sign { fields, secret } => {
            let secret = match secret {
                Some(s) => SharedSecret::from(s),
                None => config::load_secret()?,
            };
            println!("{}", signed_query(&fields, &secret)?);
            Ok(())
        }
    }
}
