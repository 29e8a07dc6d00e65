//! Bot layer - Discord-specific interface and command handlers
//!
//! This module is the "screen" of `DiscFlip`: slash commands render the
//! filtered inventory, the dashboard, and the cash and tag lists, and route
//! edits into the [`Ledger`].

/// Discord command implementations (general, dashboard, disc, inventory, cash, tag)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Validation of typed user input
pub mod input;
/// Labels for records and resolution of user-supplied references back to records
pub mod lookup;

use crate::{
    core::{filter::FilterSelection, ledger::Ledger},
    errors::{Error, Result},
    models::Tag,
};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
///
/// The ledger is behind a mutex so a command's read-modify-persist sequence is
/// never interleaved with another command's. Filter selections are kept per
/// Discord user and never persisted. When both locks are needed the ledger is
/// taken first.
pub struct BotData {
    /// Stores and their persistence
    pub ledger: Mutex<Ledger>,
    /// Each user's current inventory filter selection
    pub selections: Mutex<HashMap<serenity::UserId, FilterSelection>>,
}

impl BotData {
    /// Creates a new `BotData` instance around a loaded ledger.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            selections: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a copy of the user's filter selection (default if none yet).
    pub async fn selection_for(&self, user: serenity::UserId) -> FilterSelection {
        self.selections
            .lock()
            .await
            .get(&user)
            .cloned()
            .unwrap_or_default()
    }

    /// Applies `edit` to the user's filter selection and returns the result.
    pub async fn update_selection<F>(&self, user: serenity::UserId, edit: F) -> FilterSelection
    where
        F: FnOnce(&mut FilterSelection),
    {
        let mut selections = self.selections.lock().await;
        let selection = selections.entry(user).or_default();
        edit(selection);
        selection.clone()
    }

    /// Adds the referenced tag to the user's tag filters.
    ///
    /// The ledger stays locked until the selection is updated, so a tag being
    /// deleted concurrently is either swept from the selection or never added.
    /// Returns the tag and whether the filter was newly added, or `None` if
    /// the reference does not resolve.
    pub async fn add_tag_filter(
        &self,
        user: serenity::UserId,
        reference: &str,
    ) -> Option<(Tag, bool)> {
        let ledger = self.ledger.lock().await;
        let tag = lookup::resolve_tag(ledger.stores(), reference).ok()?.clone();
        let mut added = false;
        self.update_selection(user, |selection| {
            added = selection.add_tag(tag.id);
        })
        .await;
        drop(ledger);
        Some((tag, added))
    }

    /// Deletes the referenced tag from the stores and from every user's
    /// selection. Returns the tag and how many discs carried it, or `None` if
    /// the reference does not resolve.
    ///
    /// # Errors
    /// Returns an error if the tag vanished between lookup and removal.
    pub async fn delete_tag(&self, reference: &str) -> Result<Option<(Tag, usize)>> {
        let mut ledger = self.ledger.lock().await;
        let Ok(id) = lookup::resolve_tag(ledger.stores(), reference).map(|t| t.id) else {
            return Ok(None);
        };
        let detached_from = ledger
            .stores()
            .discs()
            .iter()
            .filter(|d| d.has_tag(id))
            .count();
        let removed = ledger.remove_tag(id).await?;

        let mut selections = self.selections.lock().await;
        for selection in selections.values_mut() {
            selection.forget_tag(removed.id);
        }
        drop(selections);
        drop(ledger);

        Ok(Some((removed, detached_from)))
    }
}

/// Poise context type used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::dashboard(),
        commands::disc(),
        commands::inventory(),
        commands::filter(),
        commands::cash(),
        commands::tag(),
    ]
}

/// Builds the poise framework and runs the Discord client until it stops.
///
/// Commands are registered in `dev_guild` when given (instant updates while
/// developing), otherwise globally.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData, dev_guild: Option<u64>) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild) = dev_guild {
                    let guild_id = serenity::GuildId::new(guild);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
