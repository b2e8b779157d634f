use std::sync::Arc;

use anyhow::{Context, Result};
use link2view::{
    access::AccessGate,
    bot::{MessageHandler, Poller},
    config::Config,
    fetcher::HttpFetcher,
    publisher::TelegraphClient,
    sites::SiteRegistry,
    telegram::BotClient,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let publisher = TelegraphClient::connect(
        config.telegraph_api_url(),
        config.telegraph_short_name(),
    )
    .await
    .context("failed to create Telegraph account")?;

    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;
    let handler = MessageHandler::new(
        AccessGate::new(config.authorized_user()),
        SiteRegistry::new(fetcher),
        Arc::new(publisher),
    );

    let bot = BotClient::new(
        config.telegram_api_url(),
        config.bot_token(),
        config.poll_timeout(),
    )?;
    let me = bot.get_me().await.context("bot token rejected by Telegram")?;
    info!(
        bot = me.username.as_deref().unwrap_or("unknown"),
        operator = %config.authorized_user(),
        "Bot started"
    );

    Poller::new(bot, Arc::new(handler), config.poll_timeout())
        .run()
        .await
}
