//! Core types for Lootlens: loot tables, pools, entries, and the table cache.
//!
//! This crate defines the data model that loot table JSON deserializes into,
//! plus the loader and naming helpers that the resolver and CLI share. It does
//! no probability math itself — see `ll-resolve` for that.

/// Table cache keyed by canonical path, and the directory loader.
pub mod cache;
/// Overview catalog grouping tables by biome, rarity, and mob.
pub mod catalog;
/// Entry conditions (random chance, equipment exclusion).
pub mod condition;
/// Resolution configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Entry functions and the `set_count` count model.
pub mod function;
/// Human-readable display names for raw identifiers.
pub mod naming;
/// Cross-table reference detection and path mapping.
pub mod reference;
/// Loot tables, pools, and entries.
pub mod table;

/// Re-export cache types.
pub use cache::{BrokenReference, TableCache};
/// Re-export catalog types.
pub use catalog::{BiomeGroup, Catalog, MobTable, RARITY_ORDER, RarityGroup};
/// Re-export condition types.
pub use condition::Condition;
/// Re-export configuration.
pub use config::ResolveConfig;
/// Re-export error types.
pub use error::{LootError, LootResult};
/// Re-export function types.
pub use function::{Count, Function};
/// Re-export naming helpers.
pub use naming::{UNKNOWN_LABEL, display_name, display_name_or};
/// Re-export the reference scheme.
pub use reference::ReferenceScheme;
/// Re-export table model types.
pub use table::{Entry, LootTable, Pool};
