//! The table cache: every loaded table, keyed by canonical path.

use std::collections::HashMap;
use std::path::{Component, Path};

use log::debug;
use walkdir::WalkDir;

use crate::error::{LootError, LootResult};
use crate::reference::ReferenceScheme;
use crate::table::LootTable;

/// All tables known to a resolution, keyed by canonical path
/// (`<ns>/loot_table/<rest>` without the `.json` extension).
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    tables: HashMap<String, LootTable>,
}

/// A reference entry whose target table is not in the cache.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrokenReference {
    /// Path of the table containing the reference.
    pub from: String,
    /// Canonical path the reference resolves to.
    pub target: String,
}

impl TableCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache from `(path, table)` pairs.
    pub fn from_tables<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = (S, LootTable)>,
        S: Into<String>,
    {
        Self {
            tables: tables.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Insert a table, replacing any table at the same path.
    pub fn insert(&mut self, path: impl Into<String>, table: LootTable) -> Option<LootTable> {
        self.tables.insert(path.into(), table)
    }

    /// Look up a table by canonical path.
    pub fn get(&self, path: &str) -> Option<&LootTable> {
        self.tables.get(path)
    }

    /// Returns true if a table exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.tables.contains_key(path)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the cache holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All table paths, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Iterate over `(path, table)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LootTable)> {
        self.tables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every reference whose target is missing, sorted by source then target.
    pub fn broken_references(&self, scheme: &ReferenceScheme) -> Vec<BrokenReference> {
        let mut broken = Vec::new();
        for (from, table) in self.iter() {
            for identity in table.entries().filter_map(|e| e.identity()) {
                if !scheme.is_reference(identity) {
                    continue;
                }
                let target = scheme.table_path(identity);
                if !self.contains(&target) {
                    broken.push(BrokenReference {
                        from: from.to_string(),
                        target,
                    });
                }
            }
        }
        broken.sort();
        broken.dedup();
        broken
    }

    /// Load every `<ns>/loot_table/**/*.json` under `root`.
    ///
    /// `root` is a datapack's `data` directory. Files elsewhere are ignored.
    pub fn load_dir(root: &Path) -> LootResult<Self> {
        if !root.is_dir() {
            return Err(LootError::NotADirectory(root.to_path_buf()));
        }

        let mut cache = Self::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let Some(key) = canonical_key(relative) else {
                continue;
            };

            let json = std::fs::read_to_string(path).map_err(|source| LootError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let table = LootTable::from_json(&json).map_err(|source| LootError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("loaded table {key} ({} pools)", table.pools.len());
            cache.insert(key, table);
        }

        debug!("loaded {} tables from {}", cache.len(), root.display());
        Ok(cache)
    }
}

/// `<ns>/loot_table/a/b.json` → `<ns>/loot_table/a/b`; anything else → `None`.
fn canonical_key(relative: &Path) -> Option<String> {
    if relative.extension().is_none_or(|ext| ext != "json") {
        return None;
    }
    let stem = relative.with_extension("");
    let parts: Vec<&str> = stem
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if parts.len() < 3 || parts[1] != "loot_table" {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::table::{Entry, Pool};

    fn write(root: &Path, rel: &str, json: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }

    #[test]
    fn canonical_keys() {
        assert_eq!(
            canonical_key(Path::new("ns/loot_table/refs/forest/common.json")).as_deref(),
            Some("ns/loot_table/refs/forest/common")
        );
        assert_eq!(canonical_key(Path::new("ns/recipe/x.json")), None);
        assert_eq!(canonical_key(Path::new("ns/loot_table/x.txt")), None);
        assert_eq!(canonical_key(Path::new("lootlens.json")), None);
    }

    #[test]
    fn load_directory() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "ic/loot_table/refs/common.json",
            r#"{"pools": [{"rolls": 1, "entries": [{"type": "minecraft:item", "name": "minecraft:stick"}]}]}"#,
        );
        write(dir.path(), "ic/loot_table/mobs/forest/common/zombie.json", r#"{"pools": []}"#);
        write(dir.path(), "ic/tags/item/x.json", r#"{"values": []}"#);
        write(dir.path(), "lootlens.json", r#"{"namespace": "ic"}"#);

        let cache = TableCache::load_dir(dir.path()).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.paths(),
            vec!["ic/loot_table/mobs/forest/common/zombie", "ic/loot_table/refs/common"]
        );
        assert_eq!(cache.get("ic/loot_table/refs/common").unwrap().pools.len(), 1);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ic/loot_table/broken.json", "{ not json");
        let err = TableCache::load_dir(dir.path()).unwrap_err();
        match err {
            LootError::Parse { path, .. } => assert!(path.ends_with("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.json");
        fs::write(&file, "{}").unwrap();
        assert!(matches!(
            TableCache::load_dir(&file),
            Err(LootError::NotADirectory(_))
        ));
    }

    #[test]
    fn finds_broken_references() {
        let scheme = ReferenceScheme::new("ic");
        let cache = TableCache::from_tables([
            (
                "ic/loot_table/a",
                LootTable::with_pools(vec![Pool::new(vec![
                    Entry::table_ref("ic:refs/present"),
                    Entry::table_ref("ic:refs/missing"),
                    Entry::item("minecraft:stick"),
                ])]),
            ),
            ("ic/loot_table/refs/present", LootTable::default()),
        ]);

        let broken = cache.broken_references(&scheme);
        assert_eq!(
            broken,
            vec![BrokenReference {
                from: "ic/loot_table/a".to_string(),
                target: "ic/loot_table/refs/missing".to_string(),
            }]
        );
    }

    #[test]
    fn insert_and_lookup() {
        let mut cache = TableCache::new();
        assert!(cache.is_empty());
        assert!(cache.insert("x", LootTable::default()).is_none());
        assert!(cache.contains("x"));
        assert!(cache.insert("x", LootTable::default()).is_some());
        assert_eq!(cache.len(), 1);
    }
}
