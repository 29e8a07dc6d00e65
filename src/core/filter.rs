//! Inventory filtering - status filter combined with active tag filters.
//!
//! Filtering is a pure function of the inventory and a selection. The status
//! predicate is applied first, then every active tag filter must be held by a
//! disc for it to survive. Relative order of the input is always preserved.

use crate::models::Disc;
use std::fmt;
use uuid::Uuid;

/// Categorical filter over sold/unsold/eBay status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every disc
    #[default]
    All,
    /// Discs not yet sold
    Unsold,
    /// Every sold disc
    SoldAll,
    /// Discs sold through eBay
    SoldOnEbay,
    /// Discs sold anywhere but eBay
    SoldNotOnEbay,
}

impl StatusFilter {
    /// Every status filter, in menu order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Unsold,
        Self::SoldAll,
        Self::SoldOnEbay,
        Self::SoldNotOnEbay,
    ];

    /// Label shown for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Discs",
            Self::Unsold => "Unsold Discs",
            Self::SoldAll => "Sold Discs (all)",
            Self::SoldOnEbay => "Sold Discs (on eBay)",
            Self::SoldNotOnEbay => "Sold Discs (outside eBay)",
        }
    }

    /// Whether the disc satisfies this status predicate.
    #[must_use]
    pub const fn matches(self, disc: &Disc) -> bool {
        match self {
            Self::All => true,
            Self::Unsold => !disc.was_sold,
            Self::SoldAll => disc.was_sold,
            Self::SoldOnEbay => disc.was_sold && disc.sold_on_ebay,
            Self::SoldNotOnEbay => disc.was_sold && !disc.sold_on_ebay,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the discs matching `status` that also hold every tag in `tag_filters`.
///
/// A tag filter no disc holds simply leaves nothing to return.
#[must_use]
pub fn apply_filters(inventory: &[Disc], status: StatusFilter, tag_filters: &[Uuid]) -> Vec<Disc> {
    inventory
        .iter()
        .filter(|disc| status.matches(disc))
        .filter(|disc| tag_filters.iter().all(|tag_id| disc.has_tag(*tag_id)))
        .cloned()
        .collect()
}

/// One screen's current filter state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Active status filter
    pub status: StatusFilter,
    tag_filters: Vec<Uuid>,
}

impl FilterSelection {
    /// A selection with the given status and no tag filters.
    #[must_use]
    pub const fn with_status(status: StatusFilter) -> Self {
        Self {
            status,
            tag_filters: Vec::new(),
        }
    }

    /// Active tag filters, in the order they were added.
    #[must_use]
    pub fn tag_filters(&self) -> &[Uuid] {
        &self.tag_filters
    }

    /// Adds a tag filter. Returns `false` if it was already active.
    pub fn add_tag(&mut self, tag_id: Uuid) -> bool {
        if self.tag_filters.contains(&tag_id) {
            return false;
        }
        self.tag_filters.push(tag_id);
        true
    }

    /// Removes a tag filter. Returns `false` if it was not active.
    pub fn remove_tag(&mut self, tag_id: Uuid) -> bool {
        let before = self.tag_filters.len();
        self.tag_filters.retain(|id| *id != tag_id);
        self.tag_filters.len() != before
    }

    /// Drops a deleted tag from the selection.
    pub fn forget_tag(&mut self, tag_id: Uuid) {
        self.remove_tag(tag_id);
    }

    /// Resets to all discs with no tag filters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies this selection to an inventory.
    #[must_use]
    pub fn apply(&self, inventory: &[Disc]) -> Vec<Disc> {
        apply_filters(inventory, self.status, &self.tag_filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_inventory, sold_disc, unsold_disc};

    fn ids(discs: &[Disc]) -> Vec<Uuid> {
        discs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_all_without_tags_is_identity() {
        let inventory = sample_inventory();
        let filtered = apply_filters(&inventory, StatusFilter::All, &[]);
        assert_eq!(filtered, inventory);
    }

    #[test]
    fn test_status_filter_is_exactly_the_predicate() {
        let inventory = sample_inventory();
        for status in StatusFilter::ALL {
            let filtered = apply_filters(&inventory, status, &[]);
            let expected: Vec<Uuid> = inventory
                .iter()
                .filter(|d| status.matches(d))
                .map(|d| d.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "status {status}");
        }
    }

    #[test]
    fn test_status_partitions() {
        let inventory = sample_inventory();
        let unsold = apply_filters(&inventory, StatusFilter::Unsold, &[]);
        let sold = apply_filters(&inventory, StatusFilter::SoldAll, &[]);
        let on_ebay = apply_filters(&inventory, StatusFilter::SoldOnEbay, &[]);
        let off_ebay = apply_filters(&inventory, StatusFilter::SoldNotOnEbay, &[]);

        assert_eq!(unsold.len() + sold.len(), inventory.len());
        assert_eq!(on_ebay.len() + off_ebay.len(), sold.len());
        assert!(unsold.iter().all(|d| !d.was_sold));
        assert!(on_ebay.iter().all(|d| d.was_sold && d.sold_on_ebay));
        assert!(off_ebay.iter().all(|d| d.was_sold && !d.sold_on_ebay));
    }

    #[test]
    fn test_sold_on_ebay_scenario() {
        let first = unsold_disc(10, 15);
        let second = sold_disc(20, 25, true);
        let inventory = vec![first, second.clone()];

        let filtered = apply_filters(&inventory, StatusFilter::SoldOnEbay, &[]);
        assert_eq!(filtered, vec![second]);
    }

    #[test]
    fn test_unknown_tag_filter_yields_empty() {
        let inventory = sample_inventory();
        let missing = Uuid::new_v4();
        assert!(apply_filters(&inventory, StatusFilter::All, &[missing]).is_empty());
    }

    #[test]
    fn test_tag_filters_are_conjunctive_and_narrowing() {
        let driver = Uuid::new_v4();
        let blue = Uuid::new_v4();

        let mut a = unsold_disc(10, 15);
        a.attach_tag(driver);
        let mut b = unsold_disc(10, 15);
        b.attach_tag(driver);
        b.attach_tag(blue);
        let mut c = sold_disc(10, 20, false);
        c.attach_tag(blue);
        c.attach_tag(driver);
        let d = unsold_disc(5, 6);
        let inventory = vec![a.clone(), b.clone(), c.clone(), d];

        let by_driver = apply_filters(&inventory, StatusFilter::All, &[driver]);
        assert_eq!(ids(&by_driver), vec![a.id, b.id, c.id]);

        let by_both = apply_filters(&inventory, StatusFilter::All, &[driver, blue]);
        assert_eq!(ids(&by_both), vec![b.id, c.id]);
        assert!(by_both.len() <= by_driver.len());

        // tag order in the disc does not matter
        let by_both_reversed = apply_filters(&inventory, StatusFilter::All, &[blue, driver]);
        assert_eq!(by_both_reversed, by_both);

        let unsold_both = apply_filters(&inventory, StatusFilter::Unsold, &[driver, blue]);
        assert_eq!(ids(&unsold_both), vec![b.id]);
    }

    #[test]
    fn test_selection_add_remove_tag() {
        let tag = Uuid::new_v4();
        let mut selection = FilterSelection::default();

        assert!(selection.add_tag(tag));
        assert!(!selection.add_tag(tag));
        assert_eq!(selection.tag_filters(), &[tag]);

        selection.forget_tag(tag);
        assert!(selection.tag_filters().is_empty());
        assert!(!selection.remove_tag(tag));
    }

    #[test]
    fn test_selection_clear() {
        let mut selection = FilterSelection::with_status(StatusFilter::SoldAll);
        selection.add_tag(Uuid::new_v4());
        selection.clear();
        assert_eq!(selection, FilterSelection::default());
        assert_eq!(selection.status, StatusFilter::All);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StatusFilter::All.label(), "All Discs");
        assert_eq!(StatusFilter::SoldNotOnEbay.to_string(), "Sold Discs (outside eBay)");
    }
}
