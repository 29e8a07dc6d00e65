//! Cash entry entity - standalone income/expense rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cash entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_entries")]
pub struct Model {
    /// Stable cash entry id
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Index of the entry within the cash list
    pub position: i32,
    /// Signed amount in whole currency units
    pub amount: i64,
    /// Free-form memo
    pub memo: String,
}

/// `CashEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
