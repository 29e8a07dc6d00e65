//! Domain records tracked by `DiscFlip`: discs, cash entries, and tags.
//!
//! These are plain value types. They carry no persistence concerns; the
//! [`crate::core::snapshot`] module maps them to and from the database entities.

use crate::core::totals::format_currency;
use std::fmt;
use uuid::Uuid;

/// A purchased disc being resold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disc {
    /// Stable identity assigned at creation
    pub id: Uuid,
    /// Mold name (e.g. "Destroyer")
    pub name: String,
    /// Plastic type (e.g. "Champion")
    pub plastic: String,
    /// What was paid for the disc, in whole currency units
    pub purchase_price: i64,
    /// Expected sale price; only meaningful while unsold
    pub est_sell_price: i64,
    /// Whether the disc has been sold
    pub was_sold: bool,
    /// Actual sale price; only meaningful when sold
    pub sold_price: i64,
    /// Whether the sale went through eBay; always false when unsold
    pub sold_on_ebay: bool,
    /// Ids of attached tags, in the order they were attached
    pub tags: Vec<Uuid>,
}

impl Disc {
    /// Creates a new unsold disc with a freshly generated id and no tags.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        plastic: impl Into<String>,
        purchase_price: i64,
        est_sell_price: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            plastic: plastic.into(),
            purchase_price,
            est_sell_price,
            was_sold: false,
            sold_price: 0,
            sold_on_ebay: false,
            tags: Vec::new(),
        }
    }

    /// Records a sale.
    pub fn mark_sold(&mut self, sold_price: i64, sold_on_ebay: bool) {
        self.was_sold = true;
        self.sold_price = sold_price;
        self.sold_on_ebay = sold_on_ebay;
    }

    /// Reverts the disc to unsold, clearing the sale fields.
    pub fn mark_unsold(&mut self) {
        self.was_sold = false;
        self.sold_price = 0;
        self.sold_on_ebay = false;
    }

    /// Profit expected from the estimated sell price.
    #[must_use]
    pub const fn estimated_profit(&self) -> i64 {
        self.est_sell_price - self.purchase_price
    }

    /// Profit realised by the sale.
    #[must_use]
    pub const fn actual_profit(&self) -> i64 {
        self.sold_price - self.purchase_price
    }

    /// Non-negative profit counted towards eBay net; zero unless sold on eBay.
    #[must_use]
    pub fn ebay_profit(&self) -> i64 {
        if self.was_sold && self.sold_on_ebay {
            self.actual_profit().max(0)
        } else {
            0
        }
    }

    /// Whether the tag is attached to this disc.
    #[must_use]
    pub fn has_tag(&self, tag_id: Uuid) -> bool {
        self.tags.contains(&tag_id)
    }

    /// Attaches a tag, returning `false` if it was already attached.
    pub fn attach_tag(&mut self, tag_id: Uuid) -> bool {
        if self.has_tag(tag_id) {
            return false;
        }
        self.tags.push(tag_id);
        true
    }

    /// Detaches a tag, returning `false` if it was not attached.
    pub fn detach_tag(&mut self, tag_id: Uuid) -> bool {
        let before = self.tags.len();
        self.tags.retain(|id| *id != tag_id);
        self.tags.len() != before
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.plastic, self.name)
    }
}

/// A standalone cash adjustment unrelated to any disc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cash {
    /// Stable identity assigned at creation
    pub id: Uuid,
    /// Signed amount in whole currency units (negative for expenses)
    pub amount: i64,
    /// What the money was for
    pub memo: String,
}

impl Cash {
    /// Creates a new cash entry with a freshly generated id.
    #[must_use]
    pub fn new(amount: i64, memo: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            memo: memo.into(),
        }
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_currency(self.amount), self.memo)
    }
}

/// A user-defined label attachable to many discs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Stable identity assigned at creation
    pub id: Uuid,
    /// Display title; may be empty right after creation
    pub title: String,
}

impl Tag {
    /// Creates a new tag with a freshly generated id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag: {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_disc_is_unsold() {
        let disc = Disc::new("Destroyer", "Champion", 12, 20);
        assert!(!disc.was_sold);
        assert!(!disc.sold_on_ebay);
        assert_eq!(disc.estimated_profit(), 8);
        assert_eq!(disc.to_string(), "Champion Destroyer");
    }

    #[test]
    fn test_mark_unsold_clears_ebay_flag() {
        let mut disc = Disc::new("Buzzz", "ESP", 10, 18);
        disc.mark_sold(25, true);
        assert_eq!(disc.actual_profit(), 15);
        assert_eq!(disc.ebay_profit(), 15);

        disc.mark_unsold();
        assert!(!disc.was_sold);
        assert!(!disc.sold_on_ebay);
        assert_eq!(disc.sold_price, 0);
        assert_eq!(disc.ebay_profit(), 0);
    }

    #[test]
    fn test_ebay_profit_never_negative() {
        let mut disc = Disc::new("Roc3", "Star", 20, 25);
        disc.mark_sold(12, true);
        assert_eq!(disc.actual_profit(), -8);
        assert_eq!(disc.ebay_profit(), 0);
    }

    #[test]
    fn test_ebay_profit_zero_off_ebay() {
        let mut disc = Disc::new("Zone", "ESP", 10, 15);
        disc.mark_sold(30, false);
        assert_eq!(disc.ebay_profit(), 0);
    }

    #[test]
    fn test_attach_tag_is_idempotent() {
        let tag = Tag::new("Putter");
        let mut disc = Disc::new("Aviar", "DX", 5, 9);

        assert!(disc.attach_tag(tag.id));
        assert!(!disc.attach_tag(tag.id));
        assert_eq!(disc.tags, vec![tag.id]);

        assert!(disc.detach_tag(tag.id));
        assert!(!disc.detach_tag(tag.id));
        assert!(disc.tags.is_empty());
    }

    #[test]
    fn test_cash_and_tag_descriptions() {
        assert_eq!(Cash::new(-7, "Shipping labels").to_string(), "-$7: Shipping labels");
        assert_eq!(Cash::new(40, "Trade-in").to_string(), "$40: Trade-in");
        assert_eq!(Tag::new("Driver").to_string(), "Tag: Driver");
    }
}
