//! Tag entity - user-defined labels used to group and filter discs.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    /// Stable tag id
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Index of the tag within the tag list
    pub position: i32,
    /// Display title
    pub title: String,
}

/// Tags are referenced from `disc_tags` without a declared relation
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
