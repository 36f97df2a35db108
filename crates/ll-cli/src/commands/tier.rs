use std::path::Path;

pub fn run(
    dir: &Path,
    overrides: &super::Overrides<'_>,
    biome: &str,
    rarity: &str,
) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;
    let path = resolver.scheme().tier_table_path(biome, rarity);
    super::show::print_table(&resolver, &cache, &path);
    Ok(())
}
