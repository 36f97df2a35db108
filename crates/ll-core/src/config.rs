//! Configuration for resolving a datapack's loot tables.

use std::path::Path;

use serde::Deserialize;

use crate::error::{LootError, LootResult};
use crate::naming::UNKNOWN_LABEL;
use crate::reference::ReferenceScheme;

/// Settings that vary between datapacks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Namespace whose `refs/` tables are expanded.
    pub namespace: String,
    /// Entries requiring this item in the off hand are excluded.
    pub excluded_offhand_item: String,
    /// Label for entries with no identity.
    pub unknown_label: String,
    /// Directory under `loot_table/` holding the `biome/rarity/mob` catalog.
    pub catalog_dir: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            namespace: "infinity_cave".to_string(),
            excluded_offhand_item: "minecraft:ender_eye".to_string(),
            unknown_label: UNKNOWN_LABEL.to_string(),
            catalog_dir: "mobs".to_string(),
        }
    }
}

impl ResolveConfig {
    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the excluded off-hand item.
    pub fn with_excluded_offhand_item(mut self, item: impl Into<String>) -> Self {
        self.excluded_offhand_item = item.into();
        self
    }

    /// Set the catalog directory.
    pub fn with_catalog_dir(mut self, dir: impl Into<String>) -> Self {
        self.catalog_dir = dir.into();
        self
    }

    /// The reference scheme for the configured namespace.
    pub fn reference_scheme(&self) -> ReferenceScheme {
        ReferenceScheme::new(&self.namespace)
    }

    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> LootResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LootError::InvalidConfig(e.to_string()))?;
        if config.namespace.is_empty() {
            return Err(LootError::InvalidConfig("namespace must not be empty".into()));
        }
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> LootResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| LootError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ResolveConfig::default();
        assert_eq!(cfg.namespace, "infinity_cave");
        assert_eq!(cfg.excluded_offhand_item, "minecraft:ender_eye");
        assert_eq!(cfg.unknown_label, UNKNOWN_LABEL);
        assert_eq!(cfg.catalog_dir, "mobs");
    }

    #[test]
    fn builder_methods() {
        let cfg = ResolveConfig::default()
            .with_namespace("dungeon")
            .with_excluded_offhand_item("minecraft:compass")
            .with_catalog_dir("entities");
        assert_eq!(cfg.namespace, "dungeon");
        assert_eq!(cfg.excluded_offhand_item, "minecraft:compass");
        assert_eq!(cfg.catalog_dir, "entities");
        assert_eq!(cfg.reference_scheme().namespace(), "dungeon");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ResolveConfig::from_json(r#"{"namespace": "dungeon"}"#).unwrap();
        assert_eq!(cfg.namespace, "dungeon");
        assert_eq!(cfg.catalog_dir, "mobs");
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            ResolveConfig::from_json(r#"{"namespcae": "typo"}"#),
            Err(LootError::InvalidConfig(_))
        ));
        assert!(matches!(
            ResolveConfig::from_json(r#"{"namespace": ""}"#),
            Err(LootError::InvalidConfig(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = ResolveConfig::load(Path::new("/nonexistent/lootlens.json")).unwrap_err();
        assert!(matches!(err, LootError::Io { .. }));
    }
}
