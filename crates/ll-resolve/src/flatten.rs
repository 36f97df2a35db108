//! Recursive flattening of cross-table references.
//!
//! A reference entry is replaced by the contents of the table it names, with
//! every contribution scaled by the probability of reaching that table. Each
//! branch carries its own copy of the tables visited along its path, so a
//! cycle is cut where it closes while a table reached along two separate
//! paths is counted once per path. The root table itself starts unvisited,
//! so a table that reaches itself is expanded once below the root.

use std::collections::HashSet;

use log::debug;

use ll_core::{LootTable, TableCache};

use crate::aggregate::{Aggregation, LootDrop};
use crate::resolver::Resolver;

impl Resolver {
    /// Fully expanded drops of `table`, with every contribution scaled by
    /// `parent_chance`. Missing reference targets contribute nothing.
    pub fn flatten_table(
        &self,
        table: &LootTable,
        cache: &TableCache,
        parent_chance: f64,
    ) -> Vec<LootDrop> {
        let mut aggregation = Aggregation::new(&self.config().unknown_label);
        self.flatten_into(table, cache, parent_chance, &HashSet::new(), &mut aggregation);
        aggregation.finish()
    }

    /// Like [`Resolver::flatten_table`] for the cached table at `path`.
    /// `None` if the table is not cached.
    pub fn flatten_path(
        &self,
        path: &str,
        cache: &TableCache,
        parent_chance: f64,
    ) -> Option<Vec<LootDrop>> {
        cache
            .get(path)
            .map(|table| self.flatten_table(table, cache, parent_chance))
    }

    /// Flatten the table a raw reference identity
    /// (`infinity_cave:refs/forest/common`) points at.
    pub fn flatten_reference(
        &self,
        identity: &str,
        cache: &TableCache,
        parent_chance: f64,
    ) -> Option<Vec<LootDrop>> {
        self.flatten_path(&self.scheme().table_path(identity), cache, parent_chance)
    }

    fn flatten_into(
        &self,
        table: &LootTable,
        cache: &TableCache,
        chance: f64,
        visited: &HashSet<String>,
        aggregation: &mut Aggregation,
    ) {
        for pool in &table.pools {
            for selection in self.resolve_pool(pool) {
                let Some(identity) = selection.entry.identity() else {
                    continue;
                };
                let reach = chance * selection.probability;

                if !self.scheme().is_reference(identity) {
                    aggregation.record(selection.entry, identity, false, reach);
                    continue;
                }

                let path = self.scheme().table_path(identity);
                let Some(target) = cache.get(&path) else {
                    debug!("reference {identity} has no table at {path}");
                    continue;
                };
                if visited.contains(&path) {
                    debug!("cycle through {path} cut");
                    continue;
                }

                let mut branch = visited.clone();
                branch.insert(path);
                self.flatten_into(target, cache, reach, &branch, aggregation);
            }
        }
    }
}
