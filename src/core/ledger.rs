//! Ledger - the stores paired with their persistence.
//!
//! Each mutation is applied to the in-memory [`Stores`] first and, when it
//! succeeds, the affected store is saved as a full snapshot. Save failures are
//! logged and dropped by [`crate::core::snapshot`]; the in-memory state stays
//! authoritative for the rest of the session.

use crate::{
    config::settings::TagConfig,
    core::{snapshot, stores::Stores},
    errors::Result,
    models::{Cash, Disc, Tag},
};
use sea_orm::DatabaseConnection;
use tracing::info;
use uuid::Uuid;

/// Stores plus the connection they are persisted through.
#[derive(Debug)]
pub struct Ledger {
    database: DatabaseConnection,
    stores: Stores,
}

impl Ledger {
    /// Loads every store from the database. Unreadable stores start empty.
    pub async fn load(database: DatabaseConnection) -> Self {
        let stores = snapshot::load_stores(&database).await;
        info!(
            "Loaded {} discs, {} cash entries, {} tags",
            stores.discs().len(),
            stores.cash().len(),
            stores.tags().len()
        );
        Self { database, stores }
    }

    /// Read-only view of the current stores.
    #[must_use]
    pub const fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Inserts the configured tags if the tag store is empty. Returns how many were added.
    pub async fn seed_tags(&mut self, seeds: &[TagConfig]) -> usize {
        if !self.stores.tags().is_empty() || seeds.is_empty() {
            return 0;
        }
        for seed in seeds {
            self.stores.add_tag(Tag::new(seed.title.trim()));
        }
        self.persist_tags().await;
        info!("Seeded {} tags from configuration", seeds.len());
        seeds.len()
    }

    async fn persist_inventory(&self) {
        snapshot::save_inventory(&self.database, self.stores.discs()).await;
    }

    async fn persist_cash(&self) {
        snapshot::save_cash(&self.database, self.stores.cash()).await;
    }

    async fn persist_tags(&self) {
        snapshot::save_tags(&self.database, self.stores.tags()).await;
    }

    /// Adds a disc and saves the inventory.
    pub async fn add_disc(&mut self, disc: Disc) {
        self.stores.add_disc(disc);
        self.persist_inventory().await;
    }

    /// Replaces a disc (matched by id) and saves the inventory.
    pub async fn update_disc(&mut self, disc: Disc) -> Result<()> {
        self.stores.update_disc(disc)?;
        self.persist_inventory().await;
        Ok(())
    }

    /// Removes a disc and saves the inventory.
    pub async fn remove_disc(&mut self, id: Uuid) -> Result<Disc> {
        let removed = self.stores.remove_disc(id)?;
        self.persist_inventory().await;
        Ok(removed)
    }

    /// Attaches a tag to a disc, saving the inventory if anything changed.
    pub async fn attach_tag(&mut self, disc_id: Uuid, tag_id: Uuid) -> Result<bool> {
        let changed = self.stores.attach_tag(disc_id, tag_id)?;
        if changed {
            self.persist_inventory().await;
        }
        Ok(changed)
    }

    /// Detaches a tag from a disc, saving the inventory if anything changed.
    pub async fn detach_tag(&mut self, disc_id: Uuid, tag_id: Uuid) -> Result<bool> {
        let changed = self.stores.detach_tag(disc_id, tag_id)?;
        if changed {
            self.persist_inventory().await;
        }
        Ok(changed)
    }

    /// Adds a cash entry and saves the cash list.
    pub async fn add_cash(&mut self, cash: Cash) {
        self.stores.add_cash(cash);
        self.persist_cash().await;
    }

    /// Replaces a cash entry (matched by id) and saves the cash list.
    pub async fn update_cash(&mut self, cash: Cash) -> Result<()> {
        self.stores.update_cash(cash)?;
        self.persist_cash().await;
        Ok(())
    }

    /// Removes a cash entry and saves the cash list.
    pub async fn remove_cash(&mut self, id: Uuid) -> Result<Cash> {
        let removed = self.stores.remove_cash(id)?;
        self.persist_cash().await;
        Ok(removed)
    }

    /// Adds a tag and saves the tag list.
    pub async fn add_tag(&mut self, tag: Tag) {
        self.stores.add_tag(tag);
        self.persist_tags().await;
    }

    /// Replaces a tag (matched by id) and saves the tag list.
    pub async fn update_tag(&mut self, tag: Tag) -> Result<()> {
        self.stores.update_tag(tag)?;
        self.persist_tags().await;
        Ok(())
    }

    /// Removes a tag, detaches it from every disc, and saves both stores.
    pub async fn remove_tag(&mut self, id: Uuid) -> Result<Tag> {
        let removed = self.stores.remove_tag(id)?;
        self.persist_inventory().await;
        self.persist_tags().await;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::{try_load_cash, try_load_inventory, try_load_tags};
    use crate::errors::Error;
    use crate::test_utils::{setup_test_db, unsold_disc};

    #[tokio::test]
    async fn test_mutations_are_persisted() -> Result<()> {
        let db = setup_test_db().await?;
        let mut ledger = Ledger::load(db.clone()).await;

        let tag = Tag::new("Driver");
        ledger.add_tag(tag.clone()).await;

        let mut disc = unsold_disc(10, 15);
        ledger.add_disc(disc.clone()).await;
        assert!(ledger.attach_tag(disc.id, tag.id).await?);

        disc.tags.push(tag.id);
        disc.mark_sold(30, true);
        ledger.update_disc(disc.clone()).await?;

        ledger.add_cash(Cash::new(5, "Found")).await;

        assert_eq!(try_load_inventory(&db).await?, vec![disc]);
        assert_eq!(try_load_tags(&db).await?, vec![tag]);
        assert_eq!(try_load_cash(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_restores_state() -> Result<()> {
        let db = setup_test_db().await?;
        let mut ledger = Ledger::load(db.clone()).await;
        ledger.add_disc(unsold_disc(1, 2)).await;
        ledger.add_cash(Cash::new(-3, "Gas")).await;
        let expected = ledger.stores().clone();

        let reloaded = Ledger::load(db).await;
        assert_eq!(reloaded.stores(), &expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_tag_persists_cascade() -> Result<()> {
        let db = setup_test_db().await?;
        let mut ledger = Ledger::load(db.clone()).await;

        let tag = Tag::new("Blue");
        ledger.add_tag(tag.clone()).await;
        let disc = unsold_disc(4, 9);
        ledger.add_disc(disc.clone()).await;
        ledger.attach_tag(disc.id, tag.id).await?;

        ledger.remove_tag(tag.id).await?;

        assert!(try_load_tags(&db).await?.is_empty());
        let inventory = try_load_inventory(&db).await?;
        assert!(inventory[0].tags.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_persist() -> Result<()> {
        let db = setup_test_db().await?;
        let mut ledger = Ledger::load(db.clone()).await;

        let result = ledger.remove_disc(Uuid::new_v4()).await;
        assert!(matches!(result, Err(Error::DiscNotFound { .. })));
        assert!(try_load_inventory(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_tags_only_when_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let mut ledger = Ledger::load(db.clone()).await;
        let seeds = vec![
            TagConfig {
                title: "Driver".to_string(),
            },
            TagConfig {
                title: " Putter ".to_string(),
            },
        ];

        assert_eq!(ledger.seed_tags(&seeds).await, 2);
        assert_eq!(ledger.seed_tags(&seeds).await, 0);

        let titles: Vec<String> = try_load_tags(&db).await?.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Driver", "Putter"]);
        Ok(())
    }
}
