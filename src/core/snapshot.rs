//! Snapshot persistence - loading and saving whole stores.
//!
//! Every save overwrites the complete list for one store inside a single
//! database transaction: all rows are deleted, then the list is re-inserted
//! with its positions. The `try_*` functions report failures; the plain
//! `load_*`/`save_*` wrappers apply the application's policy of falling back to
//! an empty store on load and dropping failed writes with a warning.

use crate::{
    core::stores::Stores,
    entities::{self, cash_entry, disc, disc_tag, tag},
    errors::Result,
    models::{Cash, Disc, Tag},
};
use sea_orm::{DatabaseConnection, QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashMap;
use tracing::{debug, warn};

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

fn disc_from_model(model: disc::Model, tags: Vec<Uuid>) -> Disc {
    Disc {
        id: model.id,
        name: model.name,
        plastic: model.plastic,
        purchase_price: model.purchase_price,
        est_sell_price: model.est_sell_price,
        was_sold: model.was_sold,
        sold_price: model.sold_price,
        sold_on_ebay: model.was_sold && model.sold_on_ebay,
        tags,
    }
}

/// Reads the inventory in list order, with each disc's tags in attach order.
pub async fn try_load_inventory(db: &DatabaseConnection) -> Result<Vec<Disc>> {
    let models = entities::Disc::find()
        .order_by_asc(disc::Column::Position)
        .all(db)
        .await?;
    let links = entities::DiscTag::find()
        .order_by_asc(disc_tag::Column::Position)
        .all(db)
        .await?;

    let mut tags_by_disc: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        tags_by_disc.entry(link.disc_id).or_default().push(link.tag_id);
    }

    Ok(models
        .into_iter()
        .map(|model| {
            let tags = tags_by_disc.remove(&model.id).unwrap_or_default();
            disc_from_model(model, tags)
        })
        .collect())
}

/// Overwrites the stored inventory with `inventory`.
pub async fn try_save_inventory(db: &DatabaseConnection, inventory: &[Disc]) -> Result<()> {
    let txn = db.begin().await?;

    entities::DiscTag::delete_many().exec(&txn).await?;
    entities::Disc::delete_many().exec(&txn).await?;

    let discs: Vec<disc::ActiveModel> = inventory
        .iter()
        .enumerate()
        .map(|(index, d)| disc::ActiveModel {
            id: Set(d.id),
            position: Set(position(index)),
            name: Set(d.name.clone()),
            plastic: Set(d.plastic.clone()),
            purchase_price: Set(d.purchase_price),
            est_sell_price: Set(d.est_sell_price),
            was_sold: Set(d.was_sold),
            sold_price: Set(d.sold_price),
            sold_on_ebay: Set(d.sold_on_ebay),
        })
        .collect();

    let links: Vec<disc_tag::ActiveModel> = inventory
        .iter()
        .flat_map(|d| {
            d.tags
                .iter()
                .enumerate()
                .map(move |(index, tag_id)| disc_tag::ActiveModel {
                    disc_id: Set(d.id),
                    tag_id: Set(*tag_id),
                    position: Set(position(index)),
                })
        })
        .collect();

    if !discs.is_empty() {
        entities::Disc::insert_many(discs)
            .exec_without_returning(&txn)
            .await?;
    }
    if !links.is_empty() {
        entities::DiscTag::insert_many(links)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;
    debug!("Saved inventory snapshot ({} discs)", inventory.len());
    Ok(())
}

/// Reads the cash list in list order.
pub async fn try_load_cash(db: &DatabaseConnection) -> Result<Vec<Cash>> {
    let models = entities::CashEntry::find()
        .order_by_asc(cash_entry::Column::Position)
        .all(db)
        .await?;

    Ok(models
        .into_iter()
        .map(|model| Cash {
            id: model.id,
            amount: model.amount,
            memo: model.memo,
        })
        .collect())
}

/// Overwrites the stored cash list with `cash`.
pub async fn try_save_cash(db: &DatabaseConnection, cash: &[Cash]) -> Result<()> {
    let txn = db.begin().await?;

    entities::CashEntry::delete_many().exec(&txn).await?;

    let entries: Vec<cash_entry::ActiveModel> = cash
        .iter()
        .enumerate()
        .map(|(index, c)| cash_entry::ActiveModel {
            id: Set(c.id),
            position: Set(position(index)),
            amount: Set(c.amount),
            memo: Set(c.memo.clone()),
        })
        .collect();

    if !entries.is_empty() {
        entities::CashEntry::insert_many(entries)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;
    debug!("Saved cash snapshot ({} entries)", cash.len());
    Ok(())
}

/// Reads the tag list in list order.
pub async fn try_load_tags(db: &DatabaseConnection) -> Result<Vec<Tag>> {
    let models = entities::Tag::find()
        .order_by_asc(tag::Column::Position)
        .all(db)
        .await?;

    Ok(models
        .into_iter()
        .map(|model| Tag {
            id: model.id,
            title: model.title,
        })
        .collect())
}

/// Overwrites the stored tag list with `tags`.
pub async fn try_save_tags(db: &DatabaseConnection, tags: &[Tag]) -> Result<()> {
    let txn = db.begin().await?;

    entities::Tag::delete_many().exec(&txn).await?;

    let rows: Vec<tag::ActiveModel> = tags
        .iter()
        .enumerate()
        .map(|(index, t)| tag::ActiveModel {
            id: Set(t.id),
            position: Set(position(index)),
            title: Set(t.title.clone()),
        })
        .collect();

    if !rows.is_empty() {
        entities::Tag::insert_many(rows)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;
    debug!("Saved tag snapshot ({} tags)", tags.len());
    Ok(())
}

/// Loads the inventory, or an empty one if it cannot be read.
pub async fn load_inventory(db: &DatabaseConnection) -> Vec<Disc> {
    try_load_inventory(db).await.unwrap_or_else(|e| {
        warn!("Could not load inventory, starting empty: {e}");
        Vec::new()
    })
}

/// Loads the cash list, or an empty one if it cannot be read.
pub async fn load_cash(db: &DatabaseConnection) -> Vec<Cash> {
    try_load_cash(db).await.unwrap_or_else(|e| {
        warn!("Could not load cash list, starting empty: {e}");
        Vec::new()
    })
}

/// Loads the tag list, or an empty one if it cannot be read.
pub async fn load_tags(db: &DatabaseConnection) -> Vec<Tag> {
    try_load_tags(db).await.unwrap_or_else(|e| {
        warn!("Could not load tags, starting empty: {e}");
        Vec::new()
    })
}

/// Loads all three stores.
pub async fn load_stores(db: &DatabaseConnection) -> Stores {
    Stores::new(
        load_inventory(db).await,
        load_cash(db).await,
        load_tags(db).await,
    )
}

/// Saves the inventory; a failed write is logged and dropped.
pub async fn save_inventory(db: &DatabaseConnection, inventory: &[Disc]) {
    if let Err(e) = try_save_inventory(db, inventory).await {
        warn!("Failed to save inventory snapshot: {e}");
    }
}

/// Saves the cash list; a failed write is logged and dropped.
pub async fn save_cash(db: &DatabaseConnection, cash: &[Cash]) {
    if let Err(e) = try_save_cash(db, cash).await {
        warn!("Failed to save cash snapshot: {e}");
    }
}

/// Saves the tag list; a failed write is logged and dropped.
pub async fn save_tags(db: &DatabaseConnection, tags: &[Tag]) {
    if let Err(e) = try_save_tags(db, tags).await {
        warn!("Failed to save tag snapshot: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{setup_test_db, sold_disc, unsold_disc};

    #[tokio::test]
    async fn test_inventory_round_trip_keeps_order_and_tags() -> Result<()> {
        let db = setup_test_db().await?;
        let driver = Tag::new("Driver");
        let blue = Tag::new("Blue");

        let mut a = unsold_disc(10, 15);
        a.attach_tag(blue.id);
        a.attach_tag(driver.id);
        let b = sold_disc(20, 25, true);
        let mut c = sold_disc(8, 4, false);
        c.attach_tag(driver.id);
        let inventory = vec![a, b, c];

        try_save_inventory(&db, &inventory).await?;
        assert_eq!(try_load_inventory(&db).await?, inventory);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        let tag = Tag::new("Putter");
        let mut first = unsold_disc(1, 2);
        first.attach_tag(tag.id);

        try_save_inventory(&db, &[first.clone(), unsold_disc(3, 4)]).await?;
        first.detach_tag(tag.id);
        try_save_inventory(&db, std::slice::from_ref(&first)).await?;

        assert_eq!(try_load_inventory(&db).await?, vec![first]);
        Ok(())
    }

    #[tokio::test]
    async fn test_cash_and_tags_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let cash = vec![Cash::new(5, "Tip"), Cash::new(-12, "Postage")];
        let tags = vec![Tag::new("Driver"), Tag::new("")];

        try_save_cash(&db, &cash).await?;
        try_save_tags(&db, &tags).await?;

        assert_eq!(try_load_cash(&db).await?, cash);
        assert_eq!(try_load_tags(&db).await?, tags);

        try_save_cash(&db, &[]).await?;
        assert!(try_load_cash(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_without_tables_falls_back_to_empty() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let stores = load_stores(&db).await;
        assert_eq!(stores, Stores::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_save_is_dropped() -> Result<()> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        // no tables: the write fails, is logged, and does not panic
        save_inventory(&db, &[unsold_disc(1, 2)]).await;
        assert!(try_load_inventory(&db).await.is_err());
        Ok(())
    }
}
