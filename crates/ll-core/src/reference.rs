//! Cross-table references.
//!
//! A reference entry names another table as `<ns>:refs/...` (or, in older
//! data, `<ns>/refs/...`). Tables are cached under `<ns>/loot_table/...`.

/// Reference detection and path mapping for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceScheme {
    namespace: String,
    colon_marker: String,
    slash_marker: String,
    table_root: String,
}

impl ReferenceScheme {
    /// Scheme for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            colon_marker: format!("{namespace}:refs/"),
            slash_marker: format!("{namespace}/refs/"),
            table_root: format!("{namespace}/loot_table/"),
            namespace,
        }
    }

    /// The namespace this scheme recognizes.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The canonical path prefix of every table in the namespace.
    pub fn table_root(&self) -> &str {
        &self.table_root
    }

    /// Returns true if `identity` names another table.
    pub fn is_reference(&self, identity: &str) -> bool {
        identity.contains(&self.colon_marker) || identity.contains(&self.slash_marker)
    }

    /// Map a reference identity to the canonical cache path of its table.
    pub fn table_path(&self, identity: &str) -> String {
        let prefix = format!("{}:", self.namespace);
        identity.replacen(&prefix, &self.table_root, 1)
    }

    /// Canonical path of the gear table for a tier.
    pub fn gear_table_path(&self, tier: &str) -> String {
        format!("{}refs/{tier}_gear", self.table_root)
    }

    /// Canonical path of the reference table for a biome and rarity.
    pub fn tier_table_path(&self, biome: &str, rarity: &str) -> String {
        format!("{}refs/{biome}/{rarity}", self.table_root)
    }
}
