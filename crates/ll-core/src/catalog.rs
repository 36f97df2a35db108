//! The overview catalog.
//!
//! Mob tables live at `<ns>/loot_table/<catalog_dir>/<biome>/<rarity>/<mob>`.
//! The catalog groups them by biome (alphabetical) and rarity (in
//! [`RARITY_ORDER`]). Rarities outside that list are left out.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::cache::TableCache;
use crate::config::ResolveConfig;

/// Display order of rarity tiers.
pub const RARITY_ORDER: [&str; 5] = ["common", "uncommon", "rare", "epic", "legendary"];

/// One mob's table within a rarity tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobTable {
    /// Mob directory name (`zombie`).
    pub mob: String,
    /// Canonical table path.
    pub path: String,
}

/// A rarity tier within a biome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityGroup {
    /// Rarity name (`rare`).
    pub rarity: String,
    /// Mobs sorted by name.
    pub mobs: Vec<MobTable>,
}

/// A biome and its rarity tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeGroup {
    /// Biome name (`dark_forest`).
    pub biome: String,
    /// Tiers in [`RARITY_ORDER`].
    pub rarities: Vec<RarityGroup>,
}

/// Biome → rarity → mob index of catalog tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Biomes sorted by name.
    pub biomes: Vec<BiomeGroup>,
}

impl Catalog {
    /// Index every catalog table in the cache.
    pub fn build(cache: &TableCache, config: &ResolveConfig) -> Self {
        let prefix = format!(
            "{}{}/",
            config.reference_scheme().table_root(),
            config.catalog_dir
        );

        let mut grouped: BTreeMap<&str, HashMap<&str, Vec<MobTable>>> = BTreeMap::new();
        for path in cache.paths() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            let parts: Vec<&str> = rest.split('/').collect();
            let [biome, rarity, mob] = parts.as_slice() else {
                debug!("catalog skips {path}: expected biome/rarity/mob");
                continue;
            };
            grouped
                .entry(*biome)
                .or_default()
                .entry(*rarity)
                .or_default()
                .push(MobTable {
                    mob: mob.to_string(),
                    path: path.to_string(),
                });
        }

        let biomes = grouped
            .into_iter()
            .map(|(biome, mut by_rarity)| BiomeGroup {
                biome: biome.to_string(),
                rarities: RARITY_ORDER
                    .iter()
                    .filter_map(|rarity| {
                        by_rarity.remove(rarity).map(|mobs| RarityGroup {
                            rarity: rarity.to_string(),
                            mobs,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { biomes }
    }

    /// Returns true if no catalog tables were found.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Total number of mob tables across all biomes and tiers.
    pub fn table_count(&self) -> usize {
        self.biomes
            .iter()
            .flat_map(|b| &b.rarities)
            .map(|r| r.mobs.len())
            .sum()
    }
}
