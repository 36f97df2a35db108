//! Loot tables, pools, and entries as they appear in datapack JSON.

use serde::Deserialize;

use crate::condition::Condition;
use crate::function::{Count, Function, deserialize_count};

/// One droppable container: an ordered list of pools.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LootTable {
    /// The declared table type (`minecraft:entity`, `minecraft:chest`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Pools in declaration order.
    #[serde(default)]
    pub pools: Vec<Pool>,
}

impl LootTable {
    /// Parse a table from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build a table from pools directly.
    pub fn with_pools(pools: Vec<Pool>) -> Self {
        Self { kind: None, pools }
    }

    /// Iterate over every entry in every pool.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.pools.iter().flat_map(|p| p.entries.iter())
    }
}

/// A set of entries rolled together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pool {
    /// Declared number of rolls. Kept for display; every pool is resolved as
    /// a single roll.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub rolls: Option<Count>,
    /// Entries in declaration order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Pool {
    /// Build a single-roll pool from entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            rolls: Some(Count::Fixed(1)),
            entries,
        }
    }

    /// Returns true if the pool declares more than one roll.
    pub fn is_multi_roll(&self) -> bool {
        self.rolls.is_some_and(|r| r.max() > 1)
    }
}

/// A candidate outcome within a pool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    /// The declared entry type (`minecraft:item`, `minecraft:loot_table`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Item or table name.
    #[serde(default)]
    pub name: Option<String>,
    /// Table name for `minecraft:loot_table` entries. May also be an inline
    /// table, which has no identity.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Declared weight.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Conditions in declaration order.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Functions in declaration order.
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Entry {
    /// An item entry with the given name and weight 1.
    pub fn item(name: impl Into<String>) -> Self {
        Self {
            kind: Some("minecraft:item".to_string()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A table-reference entry pointing at `value`.
    pub fn table_ref(value: impl Into<String>) -> Self {
        Self {
            kind: Some("minecraft:loot_table".to_string()),
            value: Some(serde_json::Value::String(value.into())),
            ..Self::default()
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Append a condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append a function.
    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    /// The raw identity: `name`, falling back to a string `value`.
    pub fn identity(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.value.as_ref().and_then(serde_json::Value::as_str))
            .filter(|s| !s.is_empty())
    }

    /// The effective weight. Missing or zero weights count as 1.
    pub fn weight(&self) -> u32 {
        self.weight.filter(|w| *w > 0).unwrap_or(1)
    }

    /// The count from the first `set_count` function, if it yields a
    /// non-zero count.
    pub fn set_count(&self) -> Option<Count> {
        self.functions
            .iter()
            .find_map(|f| match f {
                Function::SetCount { count } => Some(*count),
                Function::Other => None,
            })
            .flatten()
            .filter(|c| !c.is_zero())
    }
}
