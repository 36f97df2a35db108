//! The biome / rarity / mob overview, with search filtering.

use ll_core::{Catalog, LootError, LootResult, TableCache, display_name};

use crate::aggregate::LootDrop;
use crate::resolver::Resolver;

/// One mob's resolved drops.
#[derive(Debug, Clone, PartialEq)]
pub struct MobDrops {
    /// Mob directory name.
    pub mob: String,
    /// Display label.
    pub name: String,
    /// Canonical table path.
    pub path: String,
    /// Drops that passed the search filter.
    pub drops: Vec<LootDrop>,
}

/// A rarity tier with at least one matching mob.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityDrops {
    /// Rarity name.
    pub rarity: String,
    /// Display label.
    pub name: String,
    /// Matching mobs.
    pub mobs: Vec<MobDrops>,
}

/// A biome with at least one matching tier.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDrops {
    /// Biome name.
    pub biome: String,
    /// Display label.
    pub name: String,
    /// Matching tiers.
    pub rarities: Vec<RarityDrops>,
}

/// Single-table drops of every catalog mob, filtered by a search term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    /// Biomes with matches.
    pub biomes: Vec<BiomeDrops>,
}

impl Overview {
    /// Resolve every catalog table and keep drops matching `search`.
    ///
    /// A drop matches when the term is empty, or when the mob's or the item's
    /// display name contains it (case-insensitive). Mobs, tiers, and biomes
    /// left with nothing are omitted.
    pub fn build(resolver: &Resolver, catalog: &Catalog, cache: &TableCache, search: &str) -> Self {
        let term = search.trim().to_lowercase();

        let biomes = catalog
            .biomes
            .iter()
            .filter_map(|biome| {
                let rarities: Vec<RarityDrops> = biome
                    .rarities
                    .iter()
                    .filter_map(|tier| {
                        let mobs: Vec<MobDrops> = tier
                            .mobs
                            .iter()
                            .filter_map(|mob| {
                                let table = cache.get(&mob.path)?;
                                let name = display_name(&mob.mob);
                                let mob_matches = name.to_lowercase().contains(&term);
                                let drops: Vec<LootDrop> = resolver
                                    .resolve_table(table)
                                    .into_iter()
                                    .filter(|d| {
                                        term.is_empty()
                                            || mob_matches
                                            || d.name.to_lowercase().contains(&term)
                                    })
                                    .collect();
                                (!drops.is_empty()).then(|| MobDrops {
                                    mob: mob.mob.clone(),
                                    name,
                                    path: mob.path.clone(),
                                    drops,
                                })
                            })
                            .collect();
                        (!mobs.is_empty()).then(|| RarityDrops {
                            rarity: tier.rarity.clone(),
                            name: display_name(&tier.rarity),
                            mobs,
                        })
                    })
                    .collect();
                (!rarities.is_empty()).then(|| BiomeDrops {
                    biome: biome.biome.clone(),
                    name: display_name(&biome.biome),
                    rarities,
                })
            })
            .collect();

        Self { biomes }
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

/// Parse a chance label (`"50.00%"`, `"50"`) into a probability in `[0, 1]`.
pub fn parse_chance_label(label: &str) -> LootResult<f64> {
    let trimmed = label.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percent: f64 = number
        .parse()
        .map_err(|_| LootError::InvalidChance(label.to_string()))?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(LootError::InvalidChance(label.to_string()));
    }
    Ok(percent / 100.0)
}

#[cfg(test)]
mod tests {
    use ll_core::{Entry, LootTable, Pool, ResolveConfig};

    use super::*;

    fn setup() -> (Resolver, Catalog, TableCache) {
        let cache = TableCache::from_tables([
            (
                "infinity_cave/loot_table/mobs/forest/common/zombie",
                LootTable::with_pools(vec![Pool::new(vec![
                    Entry::item("minecraft:rotten_flesh"),
                    Entry::item("minecraft:iron_ingot"),
                ])]),
            ),
            (
                "infinity_cave/loot_table/mobs/forest/rare/wolf",
                LootTable::with_pools(vec![Pool::new(vec![Entry::item("minecraft:bone")])]),
            ),
            (
                "infinity_cave/loot_table/mobs/desert/epic/husk",
                LootTable::with_pools(vec![Pool::new(vec![Entry::item("minecraft:sand")])]),
            ),
            (
                "infinity_cave/loot_table/mobs/desert/common/ghost",
                LootTable::default(),
            ),
        ]);
        let config = ResolveConfig::default();
        let catalog = Catalog::build(&cache, &config);
        (Resolver::new(config), catalog, cache)
    }

    #[test]
    fn no_search_shows_everything_with_drops() {
        let (resolver, catalog, cache) = setup();
        let overview = Overview::build(&resolver, &catalog, &cache, "");
        let biomes: Vec<&str> = overview.biomes.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(biomes, vec!["Desert", "Forest"]);
        // The ghost has no drops, so desert only shows epic.
        assert_eq!(overview.biomes[0].rarities.len(), 1);
        assert_eq!(overview.biomes[0].rarities[0].name, "Epic");
        assert_eq!(overview.biomes[1].rarities[0].mobs[0].drops.len(), 2);
    }

    #[test]
    fn search_by_item_name() {
        let (resolver, catalog, cache) = setup();
        let overview = Overview::build(&resolver, &catalog, &cache, "IRON");
        assert_eq!(overview.biomes.len(), 1);
        let zombie = &overview.biomes[0].rarities[0].mobs[0];
        assert_eq!(zombie.name, "Zombie");
        assert_eq!(zombie.drops.len(), 1);
        assert_eq!(zombie.drops[0].name, "Iron Ingot");
    }

    #[test]
    fn search_by_mob_name_keeps_all_drops() {
        let (resolver, catalog, cache) = setup();
        let overview = Overview::build(&resolver, &catalog, &cache, "zomb");
        let zombie = &overview.biomes[0].rarities[0].mobs[0];
        assert_eq!(zombie.drops.len(), 2);
    }

    #[test]
    fn search_without_matches() {
        let (resolver, catalog, cache) = setup();
        assert!(Overview::build(&resolver, &catalog, &cache, "elytra").is_empty());
    }

    #[test]
    fn chance_labels() {
        assert_eq!(parse_chance_label("50.00%").unwrap(), 0.5);
        assert_eq!(parse_chance_label(" 25 ").unwrap(), 0.25);
        assert_eq!(parse_chance_label("100%").unwrap(), 1.0);
        assert!(matches!(parse_chance_label("abc"), Err(LootError::InvalidChance(_))));
        assert!(parse_chance_label("150%").is_err());
        assert!(parse_chance_label("-1%").is_err());
    }
}
