//! Merging per-pool selections into per-item occurrence chances.
//!
//! Each contribution `p` multiplies the item's running non-occurrence
//! complement by `1 - p`; the reported chance is one minus the product. Items
//! keep the order in which they were first seen.

use indexmap::IndexMap;
use serde::Serialize;

use ll_core::{Count, Entry, display_name_or};

/// Running aggregation state for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedItem {
    /// Raw identity, as written in the table.
    pub identity: String,
    /// Display label.
    pub name: String,
    /// True for unexpanded references to other tables.
    pub is_reference: bool,
    /// Count from the first contributing entry.
    pub count: Option<Count>,
    not_chance: f64,
}

impl AggregatedItem {
    fn new(identity: &str, name: String, is_reference: bool, count: Option<Count>) -> Self {
        Self {
            identity: identity.to_string(),
            name,
            is_reference,
            count,
            not_chance: 1.0,
        }
    }

    /// Probability that the item never drops, given the contributions so far.
    pub fn not_chance(&self) -> f64 {
        self.not_chance
    }

    /// Probability that the item drops at least once.
    pub fn chance(&self) -> f64 {
        1.0 - self.not_chance
    }

    fn contribute(&mut self, probability: f64) {
        self.not_chance *= 1.0 - probability;
    }

    fn finish(self) -> LootDrop {
        let chance = self.chance();
        LootDrop {
            chance_label: format_chance(chance),
            identity: self.identity,
            name: self.name,
            chance,
            count: self.count,
            is_reference: self.is_reference,
        }
    }
}

/// A finalized drop, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LootDrop {
    /// Raw identity.
    pub identity: String,
    /// Display label.
    pub name: String,
    /// Probability of dropping at least once.
    pub chance: f64,
    /// `chance` as a percentage with two decimals (`"66.67%"`).
    pub chance_label: String,
    /// Item count, when the entry sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,
    /// True for unexpanded references; presentation may offer to open them.
    pub is_reference: bool,
}

/// Accumulator threaded through one resolution call.
#[derive(Debug)]
pub(crate) struct Aggregation {
    items: IndexMap<String, AggregatedItem>,
    unknown_label: String,
}

impl Aggregation {
    pub(crate) fn new(unknown_label: &str) -> Self {
        Self {
            items: IndexMap::new(),
            unknown_label: unknown_label.to_string(),
        }
    }

    /// Fold one contribution of `entry` (whose identity is `identity`) into
    /// the map.
    pub(crate) fn record(
        &mut self,
        entry: &Entry,
        identity: &str,
        is_reference: bool,
        probability: f64,
    ) {
        let unknown_label = &self.unknown_label;
        self.items
            .entry(identity.to_string())
            .or_insert_with(|| {
                let name = display_name_or(Some(identity), unknown_label);
                let count = if is_reference { None } else { entry.set_count() };
                AggregatedItem::new(identity, name, is_reference, count)
            })
            .contribute(probability);
    }

    pub(crate) fn finish(self) -> Vec<LootDrop> {
        self.items.into_values().map(AggregatedItem::finish).collect()
    }
}

/// Format a probability as a percentage with two decimals.
pub fn format_chance(chance: f64) -> String {
    format!("{:.2}%", chance * 100.0)
}
