//! Inventory Discord commands - the filtered disc list and the filter controls.
//!
//! Each user has their own [`FilterSelection`]: one status filter plus any
//! number of tag filters, all of which a disc must satisfy to be listed.

use super::{
    disc::{disc_summary, tag_titles},
    join_capped,
};
use crate::{
    core::filter::{FilterSelection, StatusFilter},
    models::{Disc, Tag},
};
use std::fmt::Write;

/// Most discs listed in one reply; the rest are counted.
pub const MAX_LISTED_DISCS: usize = 40;

/// Status filter choices offered by `/filter status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StatusChoice {
    /// Every disc
    #[name = "All Discs"]
    All,
    /// Unsold discs only
    #[name = "Unsold Discs"]
    Unsold,
    /// Every sold disc
    #[name = "Sold Discs (all)"]
    SoldAll,
    /// Discs sold on eBay
    #[name = "Sold Discs (on eBay)"]
    SoldOnEbay,
    /// Discs sold outside eBay
    #[name = "Sold Discs (outside eBay)"]
    SoldNotOnEbay,
}

impl From<StatusChoice> for StatusFilter {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::All => Self::All,
            StatusChoice::Unsold => Self::Unsold,
            StatusChoice::SoldAll => Self::SoldAll,
            StatusChoice::SoldOnEbay => Self::SoldOnEbay,
            StatusChoice::SoldNotOnEbay => Self::SoldNotOnEbay,
        }
    }
}

/// Describes a selection as its status label followed by one chip per active tag.
#[must_use]
pub fn describe_selection(selection: &FilterSelection, tags: &[Tag]) -> String {
    let mut description = selection.status.label().to_string();
    for title in selection
        .tag_filters()
        .iter()
        .filter_map(|id| tags.iter().find(|t| t.id == *id))
        .map(|t| t.title.as_str())
    {
        let _ = write!(description, " · 🏷️ {title}");
    }
    description
}

/// Renders discs one per line, listing at most `limit` of them and never
/// more than fits in an embed description.
#[must_use]
pub fn render_inventory(discs: &[Disc], tags: &[Tag], limit: usize) -> String {
    if discs.is_empty() {
        return "No discs match these filters.".to_string();
    }

    let lines: Vec<String> = discs
        .iter()
        .map(|disc| {
            let mut line = format!("**{disc}** - {}", disc_summary(disc));
            let titles = tag_titles(disc, tags);
            if !titles.is_empty() {
                let _ = write!(line, " `{}`", titles.join("` `"));
            }
            line.push('\n');
            line
        })
        .collect();
    join_capped(&lines, limit)
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{MAX_LISTED_DISCS, StatusChoice, describe_selection, render_inventory};
    use crate::{
        bot::{Context, handlers::autocomplete, input::not_found, lookup},
        core::filter::StatusFilter,
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Lists the discs matching your current filters.
    #[poise::command(slash_command, prefix_command)]
    pub async fn inventory(ctx: Context<'_>) -> Result<()> {
        let selection = ctx.data().selection_for(ctx.author().id).await;

        let (title, body, shown, total) = {
            let ledger = ctx.data().ledger.lock().await;
            let stores = ledger.stores();
            let filtered = stores.filtered(&selection);
            (
                describe_selection(&selection, stores.tags()),
                render_inventory(&filtered, stores.tags(), MAX_LISTED_DISCS),
                filtered.len(),
                stores.discs().len(),
            )
        };

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Inventory** - {title}"))
            .description(body)
            .color(0x0044_A863)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{shown} of {total} discs"
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Parent command for your inventory filters.
    #[poise::command(
        slash_command,
        subcommands("filter_status", "filter_add_tag", "filter_remove_tag", "filter_clear")
    )]
    pub async fn filter(ctx: Context<'_>) -> Result<()> {
        let help_text = "Inventory filter command. Available subcommands:\n\
            `/filter status` - Show all, unsold, or sold discs\n\
            `/filter add_tag` - Only show discs carrying a tag\n\
            `/filter remove_tag` - Drop one tag filter\n\
            `/filter clear` - Reset every filter";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Sets which discs to show by sold/unsold/eBay status.
    #[poise::command(slash_command, rename = "status")]
    pub async fn filter_status(
        ctx: Context<'_>,
        #[description = "Which discs to show"] status: StatusChoice,
    ) -> Result<()> {
        let status = StatusFilter::from(status);
        ctx.data()
            .update_selection(ctx.author().id, |selection| selection.status = status)
            .await;

        ctx.say(format!("🔎 Showing **{status}**.")).await?;
        Ok(())
    }

    /// Adds a tag filter; discs must carry every active tag.
    #[poise::command(slash_command, rename = "add_tag")]
    pub async fn filter_add_tag(
        ctx: Context<'_>,
        #[description = "Tag discs must carry"]
        #[autocomplete = "autocomplete::autocomplete_tag"]
        tag: String,
    ) -> Result<()> {
        let Some((found, added)) = ctx.data().add_tag_filter(ctx.author().id, &tag).await else {
            ctx.say(not_found("tag", &tag)).await?;
            return Ok(());
        };

        let message = if added {
            format!("🏷️ Now filtering by '{}'.", found.title)
        } else {
            format!("ℹ️ Already filtering by '{}'.", found.title)
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Removes one of your active tag filters.
    #[poise::command(slash_command, rename = "remove_tag")]
    pub async fn filter_remove_tag(
        ctx: Context<'_>,
        #[description = "Tag filter to remove"]
        #[autocomplete = "autocomplete::autocomplete_active_tag_filter"]
        tag: String,
    ) -> Result<()> {
        let found = {
            let ledger = ctx.data().ledger.lock().await;
            lookup::resolve_tag(ledger.stores(), &tag).cloned()
        };
        let Ok(found) = found else {
            ctx.say(not_found("tag", &tag)).await?;
            return Ok(());
        };

        let mut removed = false;
        ctx.data()
            .update_selection(ctx.author().id, |selection| {
                removed = selection.remove_tag(found.id);
            })
            .await;

        let message = if removed {
            format!("🏷️ No longer filtering by '{}'.", found.title)
        } else {
            format!("ℹ️ You were not filtering by '{}'.", found.title)
        };
        ctx.say(message).await?;
        Ok(())
    }

    /// Resets your filters to all discs with no tag filters.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn filter_clear(ctx: Context<'_>) -> Result<()> {
        ctx.data()
            .update_selection(ctx.author().id, |selection| selection.clear())
            .await;

        ctx.say("🔎 Filters cleared. Showing **All Discs**.").await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::commands::EMBED_DESCRIPTION_LIMIT;
    use crate::test_utils::{sold_disc, unsold_disc};

    #[test]
    fn test_choice_maps_to_status() {
        assert_eq!(StatusFilter::from(StatusChoice::All), StatusFilter::All);
        assert_eq!(
            StatusFilter::from(StatusChoice::SoldNotOnEbay),
            StatusFilter::SoldNotOnEbay
        );
    }

    #[test]
    fn test_describe_selection_lists_tag_chips() {
        let driver = Tag::new("Driver");
        let blue = Tag::new("Blue");
        let mut selection = FilterSelection::with_status(StatusFilter::Unsold);
        selection.add_tag(blue.id);
        selection.add_tag(driver.id);

        assert_eq!(
            describe_selection(&selection, &[driver, blue]),
            "Unsold Discs · 🏷️ Blue · 🏷️ Driver"
        );
    }

    #[test]
    fn test_render_inventory_lines() {
        let tag = Tag::new("Driver");
        let mut first = unsold_disc(10, 15);
        first.attach_tag(tag.id);
        let second = sold_disc(20, 18, false);

        let text = render_inventory(&[first, second], &[tag], MAX_LISTED_DISCS);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "**Champion Destroyer** - Estimated profit: $5 `Driver`",
                "**ESP Buzzz** - Profit: -$2 | Not sold on eBay",
            ]
        );
    }

    #[test]
    fn test_render_inventory_truncates() {
        let discs: Vec<Disc> = (0..5).map(|i| unsold_disc(i, i)).collect();
        let text = render_inventory(&discs, &[], 3);
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("…and 2 more\n"));
    }

    #[test]
    fn test_render_inventory_fits_embed() {
        let discs: Vec<Disc> = (0..MAX_LISTED_DISCS)
            .map(|i| {
                let mut disc = unsold_disc(10, 15);
                disc.name =
                    format!("Glow Halo Metal Flake Limited Run Signature Series Tour Destroyer {i}");
                disc
            })
            .collect();

        let text = render_inventory(&discs, &[], MAX_LISTED_DISCS);
        assert!(text.chars().count() <= EMBED_DESCRIPTION_LIMIT);
        let listed = text.lines().filter(|l| l.starts_with("**")).count();
        assert!(listed < MAX_LISTED_DISCS);
        assert!(text.lines().last().is_some_and(|l| l.starts_with("…and ")));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_inventory(&[], &[], 10), "No discs match these filters.");
    }
}
