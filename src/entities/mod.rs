//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each store is saved as a full snapshot into its own table; each entity has a
//! Model struct for data and an Entity struct for operations.

pub mod cash_entry;
pub mod disc;
pub mod disc_tag;
pub mod tag;

// Re-export specific types to avoid conflicts
pub use cash_entry::{Column as CashEntryColumn, Entity as CashEntry, Model as CashEntryModel};
pub use disc::{Column as DiscColumn, Entity as Disc, Model as DiscModel};
pub use disc_tag::{Column as DiscTagColumn, Entity as DiscTag, Model as DiscTagModel};
pub use tag::{Column as TagColumn, Entity as Tag, Model as TagModel};
