//! Core business logic - framework-agnostic inventory, cash, and tag operations.
//!
//! The filter and totals engines are pure functions over plain records; the
//! stores and ledger hold the session state and persist it.

/// Inventory filtering by status and tags
pub mod filter;
/// In-memory stores paired with snapshot persistence
pub mod ledger;
/// Whole-store load/save against the database
pub mod snapshot;
/// In-memory disc, cash, and tag stores
pub mod stores;
/// Tag cascade on deletion
pub mod tags;
/// Dashboard totals and currency formatting
pub mod totals;
