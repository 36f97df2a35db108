use std::path::Path;

pub fn run(dir: &Path, overrides: &super::Overrides<'_>, tier: &str) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;
    let path = resolver.scheme().gear_table_path(tier);
    super::show::print_table(&resolver, &cache, &path);
    Ok(())
}
