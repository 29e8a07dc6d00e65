//! Tag Discord commands - creating, renaming, listing, and deleting tags.
//!
//! Deleting a tag detaches it from every disc and drops it from every user's
//! active tag filters.

use crate::{
    bot::lookup,
    models::{Disc, Tag},
};

/// Title given to tags created without one.
pub const PLACEHOLDER_TAG_TITLE: &str = "New Tag";

/// Discord's limit on fields in one embed.
pub const MAX_TAG_FIELDS: usize = 25;

/// One inline embed field per tag (label, disc count), capped at [`MAX_TAG_FIELDS`].
#[must_use]
pub fn tag_fields(tags: &[Tag], discs: &[Disc]) -> Vec<(String, String, bool)> {
    tags.iter()
        .take(MAX_TAG_FIELDS)
        .map(|t| {
            let count = discs.iter().filter(|d| d.has_tag(t.id)).count();
            (lookup::tag_label(t), format!("{count} disc(s)"), true)
        })
        .collect()
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{PLACEHOLDER_TAG_TITLE, tag_fields};
    use crate::{
        bot::{
            Context,
            handlers::autocomplete,
            input::{non_empty, not_found, required},
            lookup,
        },
        errors::Result,
        models::Tag,
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Parent command for managing tags.
    #[poise::command(
        slash_command,
        subcommands("tag_add", "tag_rename", "tag_delete", "tag_list")
    )]
    pub async fn tag(ctx: Context<'_>) -> Result<()> {
        let help_text = "Tag command. Available subcommands:\n\
            `/tag add` - Create a tag\n\
            `/tag rename` - Rename a tag\n\
            `/tag delete` - Delete a tag and remove it from every disc\n\
            `/tag list` - List tags and how many discs carry each";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Creates a tag. Without a title it starts out as "New Tag".
    #[poise::command(slash_command, rename = "add")]
    pub async fn tag_add(
        ctx: Context<'_>,
        #[description = "Tag title (e.g., 'Driver')"] title: Option<String>,
    ) -> Result<()> {
        let title = title
            .as_deref()
            .and_then(non_empty)
            .unwrap_or_else(|| PLACEHOLDER_TAG_TITLE.to_string());

        let tag = Tag::new(title);
        let message = format!("🏷️ Created tag '{}'.", tag.title);
        ctx.data().ledger.lock().await.add_tag(tag).await;

        ctx.say(message).await?;
        Ok(())
    }

    /// Renames a tag.
    #[poise::command(slash_command, rename = "rename")]
    pub async fn tag_rename(
        ctx: Context<'_>,
        #[description = "Tag to rename"]
        #[autocomplete = "autocomplete::autocomplete_tag"]
        tag: String,
        #[description = "New title"] title: String,
    ) -> Result<()> {
        let title = match required(&title, "Tag title") {
            Ok(value) => value,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let message = {
            let mut ledger = ctx.data().ledger.lock().await;
            match lookup::resolve_tag(ledger.stores(), &tag).cloned() {
                Err(_) => not_found("tag", &tag),
                Ok(mut renamed) => {
                    let message = format!("🏷️ Renamed '{}' to '{title}'.", renamed.title);
                    renamed.title = title;
                    ledger.update_tag(renamed).await?;
                    message
                }
            }
        };

        ctx.say(message).await?;
        Ok(())
    }

    /// Deletes a tag, removing it from every disc and every active filter.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn tag_delete(
        ctx: Context<'_>,
        #[description = "Tag to delete"]
        #[autocomplete = "autocomplete::autocomplete_tag"]
        tag: String,
    ) -> Result<()> {
        let Some((removed, detached_from)) = ctx.data().delete_tag(&tag).await? else {
            ctx.say(not_found("tag", &tag)).await?;
            return Ok(());
        };

        info!(
            "Deleted tag '{}' ({}), detached from {detached_from} discs",
            removed.title, removed.id
        );
        ctx.say(format!(
            "🗑️ Deleted tag '{}' and removed it from {detached_from} disc(s).",
            removed.title
        ))
        .await?;
        Ok(())
    }

    /// Lists every tag with the number of discs carrying it.
    #[poise::command(slash_command, rename = "list")]
    pub async fn tag_list(ctx: Context<'_>) -> Result<()> {
        let (fields, total) = {
            let ledger = ctx.data().ledger.lock().await;
            let stores = ledger.stores();
            (tag_fields(stores.tags(), stores.discs()), stores.tags().len())
        };

        if fields.is_empty() {
            ctx.say("No tags yet. Use `/tag add` to create one!").await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::default()
            .title("**Tags**")
            .color(0x0044_A863)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} of {total} tags",
                fields.len()
            )))
            .fields(fields);

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::unsold_disc;

    #[test]
    fn test_tag_fields_count_discs() {
        let driver = Tag::new("Driver");
        let putter = Tag::new("Putter");
        let mut disc = unsold_disc(10, 15);
        disc.attach_tag(driver.id);

        let fields = tag_fields(&[driver.clone(), putter], &[disc]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, lookup::tag_label(&driver));
        assert_eq!(fields[0].1, "1 disc(s)");
        assert_eq!(fields[1].1, "0 disc(s)");
    }

    #[test]
    fn test_tag_fields_capped_at_embed_limit() {
        let tags: Vec<Tag> = (0..30).map(|i| Tag::new(format!("Tag {i}"))).collect();
        let fields = tag_fields(&tags, &[]);
        assert_eq!(fields.len(), MAX_TAG_FIELDS);
        assert_eq!(fields[24].0, lookup::tag_label(&tags[24]));
    }
}
