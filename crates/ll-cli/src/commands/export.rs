use std::path::Path;

pub fn run(
    dir: &Path,
    overrides: &super::Overrides<'_>,
    table: &str,
    flatten: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    let (resolver, cache) = super::open(dir, overrides)?;

    let drops = if flatten {
        resolver.flatten_path(table, &cache, 1.0)
    } else {
        resolver.resolve_path(table, &cache)
    };
    let Some(drops) = drops else {
        super::not_found(table);
        return Ok(());
    };

    let export = serde_json::json!({
        "table": table,
        "flattened": flatten,
        "drops": drops,
    });
    let content = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
