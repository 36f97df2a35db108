//! The resolver: configuration plus the single-table aggregator.

use log::debug;

use ll_core::{LootTable, Pool, ReferenceScheme, ResolveConfig, TableCache};

use crate::aggregate::{Aggregation, LootDrop};
use crate::pool::{Selection, resolve_pool};

/// Resolves loot tables into per-item drop chances.
///
/// Holds no state between calls; resolving the same table twice yields the
/// same drops.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolveConfig,
    scheme: ReferenceScheme,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolveConfig::default())
    }
}

impl Resolver {
    /// A resolver for the given configuration.
    pub fn new(config: ResolveConfig) -> Self {
        let scheme = config.reference_scheme();
        Self { config, scheme }
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// The reference scheme derived from the configuration.
    pub fn scheme(&self) -> &ReferenceScheme {
        &self.scheme
    }

    /// Selection probabilities for one pool.
    pub fn resolve_pool<'t>(&self, pool: &'t Pool) -> Vec<Selection<'t>> {
        if pool.is_multi_roll() {
            debug!("multi-roll pool resolved as a single roll");
        }
        resolve_pool(pool, &self.config.excluded_offhand_item)
    }

    /// Drops emitted directly by `table`. References are reported as opaque
    /// reference drops and not expanded.
    pub fn resolve_table(&self, table: &LootTable) -> Vec<LootDrop> {
        let mut aggregation = Aggregation::new(&self.config.unknown_label);
        for pool in &table.pools {
            for selection in self.resolve_pool(pool) {
                let Some(identity) = selection.entry.identity() else {
                    continue;
                };
                let is_reference = self.scheme.is_reference(identity);
                aggregation.record(selection.entry, identity, is_reference, selection.probability);
            }
        }
        aggregation.finish()
    }

    /// Single-table drops of the table at `path`, or `None` if it is not
    /// cached.
    pub fn resolve_path(&self, path: &str, cache: &TableCache) -> Option<Vec<LootDrop>> {
        cache.get(path).map(|table| self.resolve_table(table))
    }
}

#[cfg(test)]
mod tests {
    use ll_core::condition::ChanceValue;
    use ll_core::{Condition, Count, Entry, Function};

    use super::*;

    fn chance(p: f64) -> Condition {
        Condition::RandomChance {
            chance: Some(ChanceValue::Constant(p)),
        }
    }

    fn labels(drops: &[LootDrop]) -> String {
        drops
            .iter()
            .map(|d| format!("{} {}", d.name, d.chance_label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn weighted_pool_with_chance_condition() {
        let table = LootTable::with_pools(vec![Pool::new(vec![
            Entry::item("minecraft:apple"),
            Entry::item("minecraft:golden_apple").with_condition(chance(0.5)),
        ])]);
        let drops = Resolver::default().resolve_table(&table);
        insta::assert_snapshot!(labels(&drops), @r"
        Apple 66.67%
        Golden Apple 33.33%
        ");
    }

    #[test]
    fn same_item_across_pools() {
        let table = LootTable::with_pools(vec![
            Pool::new(vec![Entry::item("minecraft:bone"), Entry::item("minecraft:stick")]),
            Pool::new(vec![Entry::item("minecraft:bone"), Entry::item("minecraft:arrow")]),
        ]);
        let drops = Resolver::default().resolve_table(&table);
        assert_eq!(drops.len(), 3);
        assert_eq!(drops[0].identity, "minecraft:bone");
        assert_eq!(drops[0].chance, 0.75);
        assert_eq!(drops[0].chance_label, "75.00%");
    }

    #[test]
    fn references_pass_through() {
        let table = LootTable::with_pools(vec![Pool::new(vec![
            Entry::table_ref("infinity_cave:refs/forest/common"),
            Entry::item("minecraft:string").with_function(Function::SetCount {
                count: Some(Count::range(1, 3)),
            }),
        ])]);
        let drops = Resolver::default().resolve_table(&table);
        assert_eq!(drops.len(), 2);
        assert!(drops[0].is_reference);
        assert_eq!(drops[0].name, "Common");
        assert_eq!(drops[0].chance_label, "50.00%");
        assert!(!drops[1].is_reference);
        assert_eq!(drops[1].count.map(|c| c.to_string()).as_deref(), Some("1–3"));
    }

    #[test]
    fn unnamed_entries_do_not_emit() {
        let empty = Entry {
            kind: Some("minecraft:empty".to_string()),
            weight: Some(3),
            ..Entry::default()
        };
        let table =
            LootTable::with_pools(vec![Pool::new(vec![Entry::item("minecraft:coal"), empty])]);
        let drops = Resolver::default().resolve_table(&table);
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].chance_label, "25.00%");
    }

    #[test]
    fn empty_table() {
        assert!(Resolver::default().resolve_table(&LootTable::default()).is_empty());
    }

    #[test]
    fn resolving_twice_is_identical() {
        let table = LootTable::with_pools(vec![Pool::new(vec![
            Entry::item("a").with_weight(2),
            Entry::item("b").with_condition(chance(0.3)),
        ])]);
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve_table(&table), resolver.resolve_table(&table));
    }

    #[test]
    fn resolve_by_path() {
        let cache = TableCache::from_tables([(
            "infinity_cave/loot_table/refs/epic_gear",
            LootTable::with_pools(vec![Pool::new(vec![Entry::item("minecraft:netherite_sword")])]),
        )]);
        let resolver = Resolver::default();
        let path = resolver.scheme().gear_table_path("epic");
        let drops = resolver.resolve_path(&path, &cache).unwrap();
        assert_eq!(drops[0].chance_label, "100.00%");
        assert!(resolver.resolve_path("missing", &cache).is_none());
    }
}
