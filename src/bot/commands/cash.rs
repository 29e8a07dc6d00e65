//! Cash Discord commands - standalone income and expenses.

use super::join_capped;
use crate::{core::totals::format_currency, models::Cash};
use std::fmt::Write;

/// One line per cash entry followed by the total of every entry, listed or not.
#[must_use]
pub fn render_cash_list(cash: &[Cash]) -> String {
    let lines: Vec<String> = cash.iter().map(|entry| format!("• {entry}\n")).collect();
    let mut text = join_capped(&lines, lines.len());
    let total: i64 = cash.iter().map(|c| c.amount).sum();
    let _ = write!(text, "**Total: {}**", format_currency(total));
    text
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::render_cash_list;
    use crate::{
        bot::{
            Context,
            handlers::autocomplete,
            input::{not_found, optional, required},
            lookup,
        },
        errors::Result,
        models::Cash,
    };
    use poise::serenity_prelude as serenity;

    /// Parent command for cash entries that are not tied to a disc.
    #[poise::command(
        slash_command,
        subcommands("cash_add", "cash_edit", "cash_delete", "cash_list")
    )]
    pub async fn cash(ctx: Context<'_>) -> Result<()> {
        let help_text = "Cash command. Available subcommands:\n\
            `/cash add` - Record income (positive) or an expense (negative)\n\
            `/cash edit` - Change an entry's amount or memo\n\
            `/cash delete` - Remove an entry\n\
            `/cash list` - List every entry with the total";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Records a cash entry. Use a negative amount for expenses.
    #[poise::command(slash_command, rename = "add")]
    pub async fn cash_add(
        ctx: Context<'_>,
        #[description = "Amount in whole dollars (negative for expenses)"] amount: i64,
        #[description = "What it was for"] memo: String,
    ) -> Result<()> {
        let memo = match required(&memo, "Memo") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let entry = Cash::new(amount, memo);
        let message = format!("✅ Recorded {entry}");
        ctx.data().ledger.lock().await.add_cash(entry).await;

        ctx.say(message).await?;
        Ok(())
    }

    /// Changes a cash entry's amount or memo.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn cash_edit(
        ctx: Context<'_>,
        #[description = "Entry to edit"]
        #[autocomplete = "autocomplete::autocomplete_cash"]
        entry: String,
        #[description = "New amount"] amount: Option<i64>,
        #[description = "New memo"] memo: Option<String>,
    ) -> Result<()> {
        let memo = match optional(memo.as_deref(), "Memo") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        if amount.is_none() && memo.is_none() {
            ctx.say("ℹ️ Nothing to change.").await?;
            return Ok(());
        }

        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_cash(ledger.stores(), &entry).cloned() {
                Err(_) => not_found("cash entry", &entry),
                Ok(mut edited) => {
                    if let Some(amount) = amount {
                        edited.amount = amount;
                    }
                    if let Some(memo) = memo {
                        edited.memo = memo;
                    }
                    let message = format!("✅ Updated to {edited}");
                    ledger.update_cash(edited).await?;
                    message
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Removes a cash entry.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn cash_delete(
        ctx: Context<'_>,
        #[description = "Entry to delete"]
        #[autocomplete = "autocomplete::autocomplete_cash"]
        entry: String,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_cash(ledger.stores(), &entry).map(|c| c.id) {
                Err(_) => not_found("cash entry", &entry),
                Ok(id) => {
                    let removed = ledger.remove_cash(id).await?;
                    format!("🗑️ Deleted {removed}")
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Lists every cash entry and the total.
    #[poise::command(slash_command, rename = "list")]
    pub async fn cash_list(ctx: Context<'_>) -> Result<()> {
        let cash = ctx.data().ledger.lock().await.stores().cash().to_vec();

        if cash.is_empty() {
            ctx.say("No cash entries yet. Use `/cash add` to record one!")
                .await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::default()
            .title("**Cash**")
            .description(render_cash_list(&cash))
            .color(0x0044_A863);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
