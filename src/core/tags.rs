//! Tag cascade - detaching a deleted tag from the inventory.

use crate::models::Disc;
use uuid::Uuid;

/// Returns the inventory with `tag_id` detached from every disc.
///
/// Discs that never held the tag come back unchanged.
#[must_use]
pub fn remove_tag(tag_id: Uuid, inventory: Vec<Disc>) -> Vec<Disc> {
    inventory
        .into_iter()
        .map(|mut disc| {
            disc.detach_tag(tag_id);
            disc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{StatusFilter, apply_filters};
    use crate::test_utils::unsold_disc;

    #[test]
    fn test_remove_tag_only_touches_tagged_discs() {
        let tag_x = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut inventory: Vec<Disc> = (0..6).map(|i| unsold_disc(10 + i, 20 + i)).collect();
        inventory[0].attach_tag(other);
        inventory[1].attach_tag(tag_x);
        inventory[4].attach_tag(other);
        inventory[4].attach_tag(tag_x);
        let before = inventory.clone();

        let after = remove_tag(tag_x, inventory);

        assert_eq!(after.len(), 6);
        for (i, (old, new)) in before.iter().zip(&after).enumerate() {
            assert!(!new.has_tag(tag_x));
            if i == 1 || i == 4 {
                let mut expected = old.clone();
                expected.detach_tag(tag_x);
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
        assert_eq!(after[4].tags, vec![other]);
    }

    #[test]
    fn test_filter_by_removed_tag_is_empty() {
        let tag_x = Uuid::new_v4();
        let mut disc = unsold_disc(1, 2);
        disc.attach_tag(tag_x);

        let after = remove_tag(tag_x, vec![disc]);
        assert!(apply_filters(&after, StatusFilter::All, &[tag_x]).is_empty());
    }
}
