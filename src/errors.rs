//! Unified error types for `DiscFlip`.
//!
//! Every fallible operation in the crate returns [`Result`], so errors from the
//! database, configuration loading, and the Discord framework can all be
//! propagated with `?` and reported in one place by the bot's error handler.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying `SeaORM` / `SQLite` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// No disc with the given id exists in the inventory
    #[error("Disc not found: {id}")]
    DiscNotFound {
        /// Id (or user-supplied reference) that failed to resolve
        id: String,
    },

    /// No cash entry with the given id exists
    #[error("Cash entry not found: {id}")]
    CashNotFound {
        /// Id (or user-supplied reference) that failed to resolve
        id: String,
    },

    /// No tag with the given id exists
    #[error("Tag not found: {id}")]
    TagNotFound {
        /// Id (or user-supplied reference) that failed to resolve
        id: String,
    },

    /// User input rejected at the data-entry boundary
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
