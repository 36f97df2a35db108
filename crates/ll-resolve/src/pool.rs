//! Within-pool selection probabilities.
//!
//! A pool is modelled as a single weighted roll. Entries that require the
//! excluded off-hand item are removed first; each survivor's weight is then
//! scaled by its availability (the product of its random-chance conditions),
//! and selection probability is the survivor's share of the scaled total.

use ll_core::{Condition, Entry, Pool};

/// A surviving entry and its chance of being the one picked by the roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'t> {
    /// The selected entry.
    pub entry: &'t Entry,
    /// Probability in `[0, 1]`. Sums to 1 across a pool's selections.
    pub probability: f64,
}

/// Product of every numeric random-chance condition; 1 when there are none.
pub fn availability(entry: &Entry) -> f64 {
    entry
        .conditions
        .iter()
        .filter_map(Condition::random_chance)
        .product()
}

/// Returns true if the entry requires `excluded_item` in the off hand.
pub fn is_excluded(entry: &Entry, excluded_item: &str) -> bool {
    entry
        .conditions
        .iter()
        .any(|c| c.requires_offhand(excluded_item))
}

/// Selection probability of every surviving entry, in declaration order.
///
/// Returns an empty list when nothing survives or every survivor's
/// availability is zero.
pub fn resolve_pool<'t>(pool: &'t Pool, excluded_item: &str) -> Vec<Selection<'t>> {
    let weighted: Vec<(&Entry, f64)> = pool
        .entries
        .iter()
        .filter(|e| !is_excluded(e, excluded_item))
        .map(|e| (e, f64::from(e.weight()) * availability(e)))
        .collect();

    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    if total.is_nan() || total <= 0.0 {
        return Vec::new();
    }

    weighted
        .into_iter()
        .map(|(entry, w)| Selection {
            entry,
            probability: w / total,
        })
        .collect()
}
