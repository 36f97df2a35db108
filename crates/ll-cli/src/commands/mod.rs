pub mod check;
pub mod export;
pub mod flatten;
pub mod gear;
pub mod overview;
pub mod show;
pub mod tier;

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use ll_core::{ResolveConfig, TableCache};
use ll_resolve::{LootDrop, Resolver};

/// Config file looked up in the data directory when `--config` is absent.
const CONFIG_FILE: &str = "lootlens.json";

/// Global options that adjust the config.
pub struct Overrides<'a> {
    pub config: Option<&'a Path>,
    pub namespace: Option<&'a str>,
}

/// Resolve the effective config for `dir`.
fn load_config(dir: &Path, overrides: &Overrides<'_>) -> Result<ResolveConfig, String> {
    let default_file = dir.join(CONFIG_FILE);
    let file = match overrides.config {
        Some(path) => Some(path),
        None if default_file.is_file() => Some(default_file.as_path()),
        None => None,
    };

    let mut config = match file {
        Some(path) => ResolveConfig::load(path).map_err(|e| e.to_string())?,
        None => ResolveConfig::default(),
    };

    if let Some(namespace) = overrides.namespace {
        if namespace.is_empty() {
            return Err("namespace must not be empty".into());
        }
        config = config.with_namespace(namespace);
    }

    log::debug!("namespace {}", config.namespace);
    Ok(config)
}

/// Load config and tables for `dir`.
fn open(dir: &Path, overrides: &Overrides<'_>) -> Result<(Resolver, TableCache), String> {
    let config = load_config(dir, overrides)?;
    let cache = TableCache::load_dir(dir).map_err(|e| e.to_string())?;
    Ok((Resolver::new(config), cache))
}

/// Render drops as a table: item, chance, count.
///
/// References keep their raw identity so they can be passed to `flatten`.
fn drops_table(drops: &[LootDrop]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Chance", "Count"]);

    for drop in drops {
        let item = if drop.is_reference {
            format!("{} → {}", drop.name, drop.identity)
        } else {
            drop.name.clone()
        };
        let count = drop
            .count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![&item, &drop.chance_label, &count]);
    }

    table
}

/// Print drops, or a placeholder line when there are none.
fn print_drops(drops: &[LootDrop]) {
    if drops.is_empty() {
        println!("  No drops.");
        return;
    }
    println!("{}", drops_table(drops));
}

fn not_found(path: &str) {
    println!("  Table not found: {path}");
}
