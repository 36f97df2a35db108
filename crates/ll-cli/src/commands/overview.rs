use std::path::Path;

use colored::Colorize;
use ll_core::Catalog;
use ll_resolve::Overview;

pub fn run(dir: &Path, overrides: &super::Overrides<'_>, search: &str) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;
    let catalog = Catalog::build(&cache, resolver.config());

    if catalog.is_empty() {
        println!(
            "  No mob tables under {}{}/.",
            resolver.scheme().table_root(),
            resolver.config().catalog_dir
        );
        return Ok(());
    }

    let overview = Overview::build(&resolver, &catalog, &cache, search);
    if overview.is_empty() {
        println!("  No results for \"{search}\".");
        return Ok(());
    }

    for biome in &overview.biomes {
        println!("{}", biome.name.bold());
        for rarity in &biome.rarities {
            println!("  {}", rarity.name.underline());
            for mob in &rarity.mobs {
                println!();
                println!("  {} {}", mob.name.bold(), mob.path.dimmed());
                super::print_drops(&mob.drops);
            }
            println!();
        }
    }

    Ok(())
}
