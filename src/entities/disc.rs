//! Disc entity - one row per disc in the inventory snapshot.
//!
//! Tag references live in the `disc_tags` table (see [`super::disc_tag`]).
//! `position` preserves the inventory's list order across save/load.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Disc database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discs")]
pub struct Model {
    /// Stable disc id
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Index of the disc within the inventory list
    pub position: i32,
    /// Mold name
    pub name: String,
    /// Plastic type
    pub plastic: String,
    /// Purchase price in whole currency units
    pub purchase_price: i64,
    /// Estimated sell price in whole currency units
    pub est_sell_price: i64,
    /// Whether the disc was sold
    pub was_sold: bool,
    /// Sale price in whole currency units
    pub sold_price: i64,
    /// Whether the sale happened on eBay
    pub sold_on_ebay: bool,
}

/// Discs are linked to tags through `disc_tags`, which carries no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
