//! Closed-form drop probability resolution for Lootlens loot tables.
//!
//! The [`Resolver`] turns a loot table into a list of [`LootDrop`]s: for each
//! item, the probability that it drops at least once. Pools are resolved as a
//! single weighted roll, random-chance conditions scale weights, entries
//! requiring the excluded off-hand item are dropped, and references to other
//! tables are either reported as-is ([`Resolver::resolve_table`]) or expanded
//! recursively ([`Resolver::flatten_table`]).

pub mod aggregate;
pub mod flatten;
pub mod overview;
pub mod pool;
pub mod resolver;

pub use aggregate::{AggregatedItem, LootDrop, format_chance};
pub use overview::{BiomeDrops, MobDrops, Overview, RarityDrops, parse_chance_label};
pub use pool::{Selection, availability, is_excluded, resolve_pool};
pub use resolver::Resolver;
