use std::path::Path;

use ll_core::Catalog;

pub fn run(dir: &Path, overrides: &super::Overrides<'_>) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;
    let catalog = Catalog::build(&cache, resolver.config());

    println!(
        "  {} tables, {} in the {} catalog",
        cache.len(),
        catalog.table_count(),
        resolver.config().catalog_dir
    );

    let broken = cache.broken_references(resolver.scheme());
    if broken.is_empty() {
        println!("  All references resolve.");
        return Ok(());
    }

    println!(
        "  {} broken reference{}:",
        broken.len(),
        if broken.len() == 1 { "" } else { "s" }
    );
    for reference in &broken {
        println!("    {} → {}", reference.from, reference.target);
    }

    Ok(())
}
