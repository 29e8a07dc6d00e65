//! Dashboard aggregation - global profit/loss totals.
//!
//! Totals are always computed over the unfiltered inventory and the full cash
//! list, and are recomputed from scratch on every call.

use crate::models::{Cash, Disc};

/// The dashboard figures, in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of every disc's purchase price
    pub total_purchased: i64,
    /// Sum of sale prices of sold discs
    pub total_sold: i64,
    /// Sum of all cash entries
    pub other_cash: i64,
    /// `total_sold - total_purchased + other_cash`
    pub current_net: i64,
    /// Sum of estimated sell prices of unsold discs
    pub estimated_gross: i64,
    /// `current_net + estimated_gross`
    pub estimated_net: i64,
    /// Sum of non-negative profits on discs sold through eBay
    pub ebay_net: i64,
}

/// Computes the dashboard totals.
#[must_use]
pub fn compute_totals(inventory: &[Disc], cash: &[Cash]) -> Totals {
    let total_purchased: i64 = inventory.iter().map(|d| d.purchase_price).sum();
    let total_sold: i64 = inventory
        .iter()
        .filter(|d| d.was_sold)
        .map(|d| d.sold_price)
        .sum();
    let other_cash: i64 = cash.iter().map(|c| c.amount).sum();
    let estimated_gross: i64 = inventory
        .iter()
        .filter(|d| !d.was_sold)
        .map(|d| d.est_sell_price)
        .sum();
    let ebay_net: i64 = inventory.iter().map(Disc::ebay_profit).sum();

    let current_net = total_sold - total_purchased + other_cash;

    Totals {
        total_purchased,
        total_sold,
        other_cash,
        current_net,
        estimated_gross,
        estimated_net: current_net + estimated_gross,
        ebay_net,
    }
}

/// Formats a whole-unit amount with the sign ahead of the currency symbol.
///
/// `12` becomes `"$12"` and `-7` becomes `"-$7"`.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    if amount >= 0 {
        format!("${amount}")
    } else {
        format!("-${}", amount.unsigned_abs())
    }
}
