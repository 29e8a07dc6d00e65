//! Disc/tag link entity - the many-to-many relationship between discs and tags.
//!
//! Rows are rewritten together with the inventory snapshot. There are no
//! foreign keys: the tag snapshot is rewritten independently, and a dangling
//! tag id only ever makes a tag filter unsatisfiable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Disc/tag link database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "disc_tags")]
pub struct Model {
    /// Disc holding the tag
    #[sea_orm(primary_key, auto_increment = false)]
    pub disc_id: Uuid,
    /// Tag held by the disc
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: Uuid,
    /// Order in which the tag was attached to the disc
    pub position: i32,
}

/// `DiscTag` declares no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
