//! Disc Discord commands - adding, editing, selling, deleting, and tagging discs.
//!
//! Every successful change goes through the ledger, which saves the inventory
//! snapshot before the lock is released.

use crate::{
    core::totals::format_currency,
    models::{Disc, Tag},
};

/// One-line profit summary for a disc.
///
/// Unsold discs show their estimated profit; sold discs show the realised
/// profit and note when the sale happened outside eBay.
#[must_use]
pub fn disc_summary(disc: &Disc) -> String {
    if !disc.was_sold {
        return format!(
            "Estimated profit: {}",
            format_currency(disc.estimated_profit())
        );
    }

    let mut summary = format!("Profit: {}", format_currency(disc.actual_profit()));
    if !disc.sold_on_ebay {
        summary.push_str(" | Not sold on eBay");
    }
    summary
}

/// Titles of the disc's tags in attach order; unknown ids are skipped.
#[must_use]
pub fn tag_titles(disc: &Disc, tags: &[Tag]) -> Vec<String> {
    disc.tags
        .iter()
        .filter_map(|id| tags.iter().find(|t| t.id == *id))
        .map(|t| t.title.clone())
        .collect()
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{disc_summary, tag_titles};
    use crate::{
        bot::{
            Context,
            handlers::autocomplete,
            input::{not_found, optional, required},
            lookup,
        },
        core::totals::format_currency,
        errors::Result,
        models::Disc,
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Parent command for managing discs in the inventory.
    #[poise::command(
        slash_command,
        subcommands(
            "disc_add",
            "disc_edit",
            "disc_sell",
            "disc_unsell",
            "disc_delete",
            "disc_tag",
            "disc_untag",
            "disc_show"
        )
    )]
    pub async fn disc(ctx: Context<'_>) -> Result<()> {
        let help_text = "Disc management command. Available subcommands:\n\
            `/disc add` - Add a newly purchased disc\n\
            `/disc edit` - Change a disc's name, plastic, or prices\n\
            `/disc sell` - Mark a disc as sold\n\
            `/disc unsell` - Mark a disc as unsold again\n\
            `/disc delete` - Remove a disc from the inventory\n\
            `/disc tag` / `/disc untag` - Attach or detach a tag\n\
            `/disc show` - Show a disc's details";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a newly purchased, unsold disc to the inventory.
    #[poise::command(slash_command, rename = "add")]
    pub async fn disc_add(
        ctx: Context<'_>,
        #[description = "Mold name (e.g., 'Destroyer')"] name: String,
        #[description = "Plastic (e.g., 'Champion')"] plastic: String,
        #[description = "What you paid, in whole dollars"] purchase_price: i64,
        #[description = "What you expect to sell it for. Defaults to 0."] est_sell_price: Option<
            i64,
        >,
    ) -> Result<()> {
        let name = match required(&name, "Disc name") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let plastic = match required(&plastic, "Plastic") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let disc = Disc::new(name, plastic, purchase_price, est_sell_price.unwrap_or(0));
        let message = format!(
            "✅ Added **{disc}** (paid {}). {}",
            format_currency(disc.purchase_price),
            disc_summary(&disc)
        );
        info!("Adding disc {} ({})", disc, disc.id);

        ctx.data().ledger.lock().await.add_disc(disc).await;

        ctx.say(message).await?;
        Ok(())
    }

    /// Edits a disc's name, plastic, purchase price, or estimated sell price.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn disc_edit(
        ctx: Context<'_>,
        #[description = "Disc to edit"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
        #[description = "New mold name"] name: Option<String>,
        #[description = "New plastic"] plastic: Option<String>,
        #[description = "New purchase price"] purchase_price: Option<i64>,
        #[description = "New estimated sell price"] est_sell_price: Option<i64>,
    ) -> Result<()> {
        let name = match optional(name.as_deref(), "Disc name") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let plastic = match optional(plastic.as_deref(), "Plastic") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        if name.is_none()
            && plastic.is_none()
            && purchase_price.is_none()
            && est_sell_price.is_none()
        {
            ctx.say("ℹ️ Nothing to change.").await?;
            return Ok(());
        }

        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_disc(ledger.stores(), &disc).cloned() {
                Err(_) => not_found("disc", &disc),
                Ok(mut edited) => {
                    if let Some(name) = name {
                        edited.name = name;
                    }
                    if let Some(plastic) = plastic {
                        edited.plastic = plastic;
                    }
                    if let Some(price) = purchase_price {
                        edited.purchase_price = price;
                    }
                    if let Some(price) = est_sell_price {
                        edited.est_sell_price = price;
                    }

                    let message = format!("✅ Updated **{edited}**. {}", disc_summary(&edited));
                    ledger.update_disc(edited).await?;
                    message
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Marks a disc as sold.
    #[poise::command(slash_command, rename = "sell")]
    pub async fn disc_sell(
        ctx: Context<'_>,
        #[description = "Disc that was sold"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
        #[description = "Sale price, in whole dollars"] sold_price: i64,
        #[description = "Was it sold on eBay?"] on_ebay: bool,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_disc(ledger.stores(), &disc).cloned() {
                Err(_) => not_found("disc", &disc),
                Ok(mut sold) => {
                    sold.mark_sold(sold_price, on_ebay);
                    let message = format!(
                        "💸 Sold **{sold}** for {}. {}",
                        format_currency(sold_price),
                        disc_summary(&sold)
                    );
                    ledger.update_disc(sold).await?;
                    message
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Marks a sold disc as unsold again, clearing its sale details.
    #[poise::command(slash_command, rename = "unsell")]
    pub async fn disc_unsell(
        ctx: Context<'_>,
        #[description = "Disc to mark unsold"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_disc(ledger.stores(), &disc).cloned() {
                Err(_) => not_found("disc", &disc),
                Ok(existing) if !existing.was_sold => {
                    format!("ℹ️ **{existing}** is already unsold.")
                }
                Ok(mut unsold) => {
                    unsold.mark_unsold();
                    let message =
                        format!("↩️ **{unsold}** is unsold again. {}", disc_summary(&unsold));
                    ledger.update_disc(unsold).await?;
                    message
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Removes a disc from the inventory.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn disc_delete(
        ctx: Context<'_>,
        #[description = "Disc to delete"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_disc(ledger.stores(), &disc).map(|d| d.id) {
                Err(_) => not_found("disc", &disc),
                Ok(id) => {
                    let removed = ledger.remove_disc(id).await?;
                    info!("Deleted disc {} ({})", removed, removed.id);
                    format!("🗑️ Deleted **{removed}**.")
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Attaches a tag to a disc.
    #[poise::command(slash_command, rename = "tag")]
    pub async fn disc_tag(
        ctx: Context<'_>,
        #[description = "Disc to tag"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
        #[description = "Tag to attach"]
        #[autocomplete = "autocomplete::autocomplete_tag"]
        tag: String,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            let target = lookup::resolve_disc(ledger.stores(), &disc).cloned();
            let label = lookup::resolve_tag(ledger.stores(), &tag).cloned();
            match (target, label) {
                (Err(_), _) => not_found("disc", &disc),
                (_, Err(_)) => not_found("tag", &tag),
                (Ok(target), Ok(label)) => {
                    if ledger.attach_tag(target.id, label.id).await? {
                        format!("🏷️ Tagged **{target}** with '{}'.", label.title)
                    } else {
                        format!("ℹ️ **{target}** already has tag '{}'.", label.title)
                    }
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Detaches a tag from a disc.
    #[poise::command(slash_command, rename = "untag")]
    pub async fn disc_untag(
        ctx: Context<'_>,
        #[description = "Disc to untag"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
        #[description = "Tag to detach"]
        #[autocomplete = "autocomplete::autocomplete_tag"]
        tag: String,
    ) -> Result<()> {
        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            let target = lookup::resolve_disc(ledger.stores(), &disc).cloned();
            let label = lookup::resolve_tag(ledger.stores(), &tag).cloned();
            match (target, label) {
                (Err(_), _) => not_found("disc", &disc),
                (_, Err(_)) => not_found("tag", &tag),
                (Ok(target), Ok(label)) => {
                    if ledger.detach_tag(target.id, label.id).await? {
                        format!("🏷️ Removed tag '{}' from **{target}**.", label.title)
                    } else {
                        format!("ℹ️ **{target}** does not have tag '{}'.", label.title)
                    }
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Shows one disc's prices, status, and tags.
    #[poise::command(slash_command, rename = "show")]
    pub async fn disc_show(
        ctx: Context<'_>,
        #[description = "Disc to show"]
        #[autocomplete = "autocomplete::autocomplete_disc"]
        disc: String,
    ) -> Result<()> {
        let found = {
            let ledger = ctx.data().ledger.lock().await;
            lookup::resolve_disc(ledger.stores(), &disc)
                .map(|found| (found.clone(), tag_titles(found, ledger.stores().tags())))
        };
        let Ok((target, titles)) = found else {
            ctx.say(not_found("disc", &disc)).await?;
            return Ok(());
        };

        let mut fields = vec![(
            "Purchase Price".to_string(),
            format_currency(target.purchase_price),
            true,
        )];
        if target.was_sold {
            fields.push((
                "Sold Price".to_string(),
                format_currency(target.sold_price),
                true,
            ));
            fields.push((
                "Sold on eBay".to_string(),
                if target.sold_on_ebay { "Yes" } else { "No" }.to_string(),
                true,
            ));
        } else {
            fields.push((
                "Est. Sell Price".to_string(),
                format_currency(target.est_sell_price),
                true,
            ));
        }
        let tags_value = if titles.is_empty() {
            "None".to_string()
        } else {
            titles.join(", ")
        };
        fields.push(("Tags".to_string(), tags_value, false));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**{target}**"))
            .description(disc_summary(&target))
            .color(0x0044_A863)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(format!("id {}", target.id)));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sold_disc, unsold_disc};

    #[test]
    fn test_summary_unsold() {
        assert_eq!(disc_summary(&unsold_disc(10, 15)), "Estimated profit: $5");
        assert_eq!(disc_summary(&unsold_disc(10, 4)), "Estimated profit: -$6");
    }

    #[test]
    fn test_summary_sold() {
        assert_eq!(disc_summary(&sold_disc(20, 25, true)), "Profit: $5");
        assert_eq!(
            disc_summary(&sold_disc(20, 12, false)),
            "Profit: -$8 | Not sold on eBay"
        );
    }

    #[test]
    fn test_tag_titles_skip_unknown() {
        let driver = Tag::new("Driver");
        let mut disc = unsold_disc(1, 2);
        disc.attach_tag(uuid::Uuid::new_v4());
        disc.attach_tag(driver.id);
        assert_eq!(tag_titles(&disc, &[driver]), vec!["Driver".to_string()]);
    }
}
