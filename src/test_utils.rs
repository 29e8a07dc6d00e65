//! Shared test utilities for `DiscFlip`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{errors::Result, models::Disc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all persistence tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an unsold test disc.
///
/// # Defaults
/// * `name`: "Destroyer"
/// * `plastic`: "Champion"
#[must_use]
pub fn unsold_disc(purchase_price: i64, est_sell_price: i64) -> Disc {
    Disc::new("Destroyer", "Champion", purchase_price, est_sell_price)
}

/// Creates a sold test disc with an estimated price equal to its purchase price.
#[must_use]
pub fn sold_disc(purchase_price: i64, sold_price: i64, sold_on_ebay: bool) -> Disc {
    let mut disc = Disc::new("Buzzz", "ESP", purchase_price, purchase_price);
    disc.mark_sold(sold_price, sold_on_ebay);
    disc
}

/// A mixed inventory covering every status: two unsold, two sold on eBay,
/// and two sold elsewhere (one at a loss).
#[must_use]
pub fn sample_inventory() -> Vec<Disc> {
    vec![
        unsold_disc(10, 15),
        sold_disc(20, 25, true),
        sold_disc(12, 30, false),
        unsold_disc(8, 6),
        sold_disc(15, 11, true),
        sold_disc(25, 20, false),
    ]
}
