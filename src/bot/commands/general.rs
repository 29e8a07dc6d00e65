//! General Discord commands - ping and help.
//! These commands touch no stores and provide basic bot functionality.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**DiscFlip Help**\n\
        Track discs bought for resale, cash on the side, and how it all nets out.\n\n\
        **Overview**\n\
        • `/dashboard` - Totals: purchased, sold, other cash, current net, estimated net, eBay net.\n\
        • `/inventory` - Lists discs matching your current filters.\n\n\
        **Discs**\n\
        • `/disc add <name> <plastic> <purchase_price> [est_sell_price]`\n\
        • `/disc edit|sell|unsell|delete|show <disc>`\n\
        • `/disc tag|untag <disc> <tag>`\n\n\
        **Filters** (yours only, reset when the bot restarts)\n\
        • `/filter status <status>` - All, unsold, sold, sold on/outside eBay.\n\
        • `/filter add_tag|remove_tag <tag>` - Discs must carry every active tag.\n\
        • `/filter clear`\n\n\
        **Cash & Tags**\n\
        • `/cash add|edit|delete|list`\n\
        • `/tag add|rename|delete|list` - Deleting a tag removes it from every disc.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
