use disc_flip::{
    bot::{self, BotData},
    config::{database, settings},
    core::ledger::Ledger,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load seed tag configuration
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Initialize database
    let database_url = database::get_database_url();
    let db = database::init_database(&database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Load stores and seed tags on first run
    let mut ledger = Ledger::load(db).await;
    ledger.seed_tags(&app_config.tags).await;

    // 6. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    let dev_guild = match env::var("DEV_GUILD_ID") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Ignoring DEV_GUILD_ID '{}': {}", raw, e);
                None
            }
        },
        Err(_) => None,
    };

    bot::run_bot(token, BotData::new(ledger), dev_guild).await
}
