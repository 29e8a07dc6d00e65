//! Database configuration module for `DiscFlip`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{CashEntry, Disc, DiscTag, Tag};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::info;

/// Default database location used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/disc_flip.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, or the default path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates the disc, disc/tag link, cash, and tag tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Disc).await?;
    create_table(db, DiscTag).await?;
    create_table(db, CashEntry).await?;
    create_table(db, Tag).await?;
    Ok(())
}

/// Connects to the database and makes sure every table exists.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready at {database_url}");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CashEntryModel, DiscModel, DiscTagModel, TagModel};
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<DiscModel> = Disc::find().limit(1).all(&db).await?;
        let _: Vec<DiscTagModel> = DiscTag::find().limit(1).all(&db).await?;
        let _: Vec<CashEntryModel> = CashEntry::find().limit(1).all(&db).await?;
        let _: Vec<TagModel> = Tag::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_init_database_in_memory() -> Result<()> {
        let db = init_database("sqlite::memory:").await?;
        let _: Vec<TagModel> = Tag::find().limit(1).all(&db).await?;
        Ok(())
    }
}
