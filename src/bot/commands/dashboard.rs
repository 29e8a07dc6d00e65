//! Dashboard command - global profit/loss totals.
//!
//! Totals ignore the caller's inventory filters; they always cover every disc
//! and every cash entry.

use crate::core::totals::{Totals, format_currency};

/// Embed fields for the dashboard, in display order.
#[must_use]
pub fn dashboard_fields(totals: &Totals) -> Vec<(String, String, bool)> {
    [
        ("Total Purchased", totals.total_purchased),
        ("Total Sold", totals.total_sold),
        ("Other Cash", totals.other_cash),
        ("Current Net", totals.current_net),
        ("Estimated Net", totals.estimated_net),
        ("eBay Net", totals.ebay_net),
    ]
    .into_iter()
    .map(|(name, amount)| (name.to_string(), format_currency(amount), true))
    .collect()
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::dashboard_fields;
    use crate::{bot::Context, errors::Result};
    use poise::serenity_prelude as serenity;

    /// Shows running totals across the whole inventory and cash list.
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(ctx: Context<'_>) -> Result<()> {
        let (totals, disc_count) = {
            let ledger = ctx.data().ledger.lock().await;
            (ledger.stores().totals(), ledger.stores().discs().len())
        };

        let color = if totals.current_net >= 0 {
            0x0044_A863 // green
        } else {
            0x00ED_4245 // red
        };

        let embed = serenity::CreateEmbed::default()
            .title("**Dashboard**")
            .description(format!("{disc_count} discs tracked"))
            .color(color)
            .fields(dashboard_fields(&totals));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_fields_format_sign() {
        let totals = Totals {
            total_purchased: 30,
            total_sold: 25,
            other_cash: -12,
            current_net: -17,
            estimated_gross: 15,
            estimated_net: -2,
            ebay_net: 5,
        };

        let fields = dashboard_fields(&totals);
        let names: Vec<&str> = fields.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Total Purchased",
                "Total Sold",
                "Other Cash",
                "Current Net",
                "Estimated Net",
                "eBay Net"
            ]
        );
        assert_eq!(fields[2].1, "-$12");
        assert_eq!(fields[3].1, "-$17");
        assert_eq!(fields[5].1, "$5");
    }
}
