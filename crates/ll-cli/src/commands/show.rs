use std::path::Path;

use colored::Colorize;
use ll_core::TableCache;
use ll_resolve::Resolver;

pub fn run(dir: &Path, overrides: &super::Overrides<'_>, table: &str) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;
    print_table(&resolver, &cache, table);
    Ok(())
}

/// Print the direct drops of the table at `path`.
pub fn print_table(resolver: &Resolver, cache: &TableCache, path: &str) {
    let Some(drops) = resolver.resolve_path(path, cache) else {
        super::not_found(path);
        return;
    };

    println!("  {}", path.bold());
    println!();
    super::print_drops(&drops);

    let references = drops.iter().filter(|d| d.is_reference).count();
    if references > 0 {
        println!();
        println!(
            "  {}",
            format!(
                "{references} reference{}; expand with `lootlens flatten`",
                if references == 1 { "" } else { "s" }
            )
            .dimmed()
        );
    }
}
