//! In-memory stores for discs, cash entries, and tags.
//!
//! `Stores` is the session's source of truth. It exposes list/add/update/remove
//! for each record type and keeps the disc-to-tag references consistent;
//! persisting the result is the job of [`crate::core::ledger::Ledger`].

use crate::{
    core::{
        filter::FilterSelection,
        tags,
        totals::{Totals, compute_totals},
    },
    errors::{Error, Result},
    models::{Cash, Disc, Tag},
};
use uuid::Uuid;

/// Records addressable by their stable id.
trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for Disc {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Cash {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Tag {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn position_of<T: Identified>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// Replaces the record sharing `record`'s id, keeping its position.
fn replace<T: Identified>(records: &mut [T], record: T) -> Option<()> {
    let index = position_of(records, record.id())?;
    records[index] = record;
    Some(())
}

fn take<T: Identified>(records: &mut Vec<T>, id: Uuid) -> Option<T> {
    position_of(records, id).map(|index| records.remove(index))
}

/// The three ordered record collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stores {
    inventory: Vec<Disc>,
    cash: Vec<Cash>,
    tags: Vec<Tag>,
}

impl Stores {
    /// Builds stores from previously loaded lists.
    #[must_use]
    pub const fn new(inventory: Vec<Disc>, cash: Vec<Cash>, tags: Vec<Tag>) -> Self {
        Self {
            inventory,
            cash,
            tags,
        }
    }

    // Inventory

    /// Every disc, in insertion order.
    #[must_use]
    pub fn discs(&self) -> &[Disc] {
        &self.inventory
    }

    /// Looks up a disc by id.
    #[must_use]
    pub fn disc(&self, id: Uuid) -> Option<&Disc> {
        self.inventory.iter().find(|d| d.id == id)
    }

    /// Appends a disc to the inventory.
    pub fn add_disc(&mut self, disc: Disc) {
        self.inventory.push(disc);
    }

    /// Replaces the disc with the same id.
    pub fn update_disc(&mut self, disc: Disc) -> Result<()> {
        let id = disc.id;
        replace(&mut self.inventory, disc).ok_or_else(|| Error::DiscNotFound {
            id: id.to_string(),
        })
    }

    /// Removes a disc, returning it.
    pub fn remove_disc(&mut self, id: Uuid) -> Result<Disc> {
        take(&mut self.inventory, id).ok_or_else(|| Error::DiscNotFound { id: id.to_string() })
    }

    /// Attaches an existing tag to a disc. Returns `false` if already attached.
    pub fn attach_tag(&mut self, disc_id: Uuid, tag_id: Uuid) -> Result<bool> {
        if self.tag(tag_id).is_none() {
            return Err(Error::TagNotFound {
                id: tag_id.to_string(),
            });
        }
        let disc = self.disc_mut(disc_id)?;
        Ok(disc.attach_tag(tag_id))
    }

    /// Detaches a tag from a disc. Returns `false` if it was not attached.
    pub fn detach_tag(&mut self, disc_id: Uuid, tag_id: Uuid) -> Result<bool> {
        let disc = self.disc_mut(disc_id)?;
        Ok(disc.detach_tag(tag_id))
    }

    fn disc_mut(&mut self, id: Uuid) -> Result<&mut Disc> {
        self.inventory
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::DiscNotFound { id: id.to_string() })
    }

    // Cash

    /// Every cash entry, in insertion order.
    #[must_use]
    pub fn cash(&self) -> &[Cash] {
        &self.cash
    }

    /// Looks up a cash entry by id.
    #[must_use]
    pub fn cash_entry(&self, id: Uuid) -> Option<&Cash> {
        self.cash.iter().find(|c| c.id == id)
    }

    /// Appends a cash entry.
    pub fn add_cash(&mut self, cash: Cash) {
        self.cash.push(cash);
    }

    /// Replaces the cash entry with the same id.
    pub fn update_cash(&mut self, cash: Cash) -> Result<()> {
        let id = cash.id;
        replace(&mut self.cash, cash).ok_or_else(|| Error::CashNotFound { id: id.to_string() })
    }

    /// Removes a cash entry, returning it.
    pub fn remove_cash(&mut self, id: Uuid) -> Result<Cash> {
        take(&mut self.cash, id).ok_or_else(|| Error::CashNotFound { id: id.to_string() })
    }

    // Tags

    /// Every tag, in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up a tag by id.
    #[must_use]
    pub fn tag(&self, id: Uuid) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Appends a tag.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Replaces the tag with the same id (used for renames).
    pub fn update_tag(&mut self, tag: Tag) -> Result<()> {
        let id = tag.id;
        replace(&mut self.tags, tag).ok_or_else(|| Error::TagNotFound { id: id.to_string() })
    }

    /// Removes a tag and detaches it from every disc.
    pub fn remove_tag(&mut self, id: Uuid) -> Result<Tag> {
        let removed =
            take(&mut self.tags, id).ok_or_else(|| Error::TagNotFound { id: id.to_string() })?;
        self.inventory = tags::remove_tag(id, std::mem::take(&mut self.inventory));
        Ok(removed)
    }

    // Derived views

    /// The inventory as seen through a filter selection.
    #[must_use]
    pub fn filtered(&self, selection: &FilterSelection) -> Vec<Disc> {
        selection.apply(&self.inventory)
    }

    /// Dashboard totals over the whole inventory and cash list.
    #[must_use]
    pub fn totals(&self) -> Totals {
        compute_totals(&self.inventory, &self.cash)
    }
}
