/// Database configuration and connection management
pub mod database;

/// Seed tag configuration loaded from config.toml
pub mod settings;
