use std::path::Path;

use colored::Colorize;
use ll_resolve::{format_chance, parse_chance_label};

pub fn run(
    dir: &Path,
    overrides: &super::Overrides<'_>,
    reference: &str,
    chance: &str,
) -> Result<(), String> {
    let parent_chance = parse_chance_label(chance).map_err(|e| e.to_string())?;
    let (resolver, cache) = super::open(dir, overrides)?;

    let Some(drops) = resolver.flatten_reference(reference, &cache, parent_chance) else {
        super::not_found(&resolver.scheme().table_path(reference));
        return Ok(());
    };

    println!(
        "  {} {}",
        reference.bold(),
        format!("at {}", format_chance(parent_chance)).dimmed()
    );
    println!();
    super::print_drops(&drops);

    Ok(())
}
