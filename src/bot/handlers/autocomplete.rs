//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions are record labels carrying a short id (see [`crate::bot::lookup`]),
//! so the chosen value resolves back to exactly one record.

use crate::bot::{
    Context,
    lookup::{cash_label, disc_label, matching_labels, tag_label},
};

/// Provides autocomplete suggestions for discs in the inventory.
pub async fn autocomplete_disc(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let ledger = ctx.data().ledger.lock().await;
    matching_labels(ledger.stores().discs(), partial, disc_label)
}

/// Provides autocomplete suggestions for cash entries.
pub async fn autocomplete_cash(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let ledger = ctx.data().ledger.lock().await;
    matching_labels(ledger.stores().cash(), partial, cash_label)
}

/// Provides autocomplete suggestions for tags.
pub async fn autocomplete_tag(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let ledger = ctx.data().ledger.lock().await;
    matching_labels(ledger.stores().tags(), partial, tag_label)
}

/// Provides autocomplete suggestions for the caller's active tag filters.
pub async fn autocomplete_active_tag_filter(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let selection = ctx.data().selection_for(ctx.author().id).await;
    let ledger = ctx.data().ledger.lock().await;
    let active: Vec<_> = ledger
        .stores()
        .tags()
        .iter()
        .filter(|tag| selection.tag_filters().contains(&tag.id))
        .cloned()
        .collect();
    matching_labels(&active, partial, tag_label)
}
