//! Entry conditions.
//!
//! Two kinds matter for probability: `minecraft:random_chance` scales an
//! entry's weight, and `minecraft:entity_properties` with an off-hand item
//! predicate can exclude the entry outright. Every other kind deserializes to
//! [`Condition::Other`] and is treated as always true.

use serde::Deserialize;

/// A predicate attached to an entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "condition")]
pub enum Condition {
    /// Passes with a fixed probability.
    #[serde(rename = "minecraft:random_chance")]
    RandomChance {
        /// The declared chance; only plain numbers are interpreted.
        #[serde(default)]
        chance: Option<ChanceValue>,
    },
    /// Tests properties of the entity the loot is rolled for.
    #[serde(rename = "minecraft:entity_properties")]
    EntityProperties {
        /// The entity predicate.
        #[serde(default)]
        predicate: Option<EntityPredicate>,
    },
    /// Any other condition; ignored.
    #[serde(other)]
    Other,
}

impl Condition {
    /// The random-chance scalar, if this is a random-chance condition with a
    /// numeric chance.
    pub fn random_chance(&self) -> Option<f64> {
        match self {
            Self::RandomChance {
                chance: Some(ChanceValue::Constant(p)),
            } => Some(*p),
            _ => None,
        }
    }

    /// Returns true if this condition requires `item` in the off hand.
    pub fn requires_offhand(&self, item: &str) -> bool {
        match self {
            Self::EntityProperties {
                predicate: Some(predicate),
            } => predicate
                .equipment
                .as_ref()
                .and_then(|e| e.offhand.as_ref())
                .and_then(|o| o.items.as_ref())
                .is_some_and(|items| items.contains(item)),
            _ => false,
        }
    }
}

/// A chance value: a plain number, or some other number provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChanceValue {
    /// A constant probability.
    Constant(f64),
    /// A number provider this crate does not evaluate.
    Provider(serde_json::Value),
}

/// The subset of an entity predicate that is inspected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityPredicate {
    /// Equipment slot predicates.
    #[serde(default)]
    pub equipment: Option<EquipmentPredicate>,
}

/// Equipment slot predicates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EquipmentPredicate {
    /// The off-hand slot.
    #[serde(default)]
    pub offhand: Option<ItemPredicate>,
}

/// An item predicate for one slot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPredicate {
    /// Accepted items.
    #[serde(default)]
    pub items: Option<ItemList>,
}

/// One item id, a list of ids, or something else (a tag object, etc.).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemList {
    /// A single item id or tag.
    One(String),
    /// Several item ids.
    Many(Vec<String>),
    /// Any other shape; matches nothing.
    Unrecognized(serde_json::Value),
}

impl ItemList {
    /// Returns true if `item` is listed.
    pub fn contains(&self, item: &str) -> bool {
        match self {
            Self::One(id) => id == item,
            Self::Many(ids) => ids.iter().any(|id| id == item),
            Self::Unrecognized(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Condition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn random_chance_scalar() {
        let c = parse(r#"{"condition": "minecraft:random_chance", "chance": 0.25}"#);
        assert_eq!(c.random_chance(), Some(0.25));
    }

    #[test]
    fn random_chance_provider_ignored() {
        let c = parse(
            r#"{"condition": "minecraft:random_chance",
                "chance": {"type": "minecraft:enchantment_level", "amount": 1}}"#,
        );
        assert_eq!(c.random_chance(), None);
    }

    #[test]
    fn offhand_list() {
        let c = parse(
            r#"{"condition": "minecraft:entity_properties", "entity": "this",
                "predicate": {"equipment": {"offhand": {"items": ["minecraft:ender_eye"]}}}}"#,
        );
        assert!(c.requires_offhand("minecraft:ender_eye"));
        assert!(!c.requires_offhand("minecraft:stick"));
        assert_eq!(c.random_chance(), None);
    }

    #[test]
    fn offhand_single_item() {
        let c = parse(
            r#"{"condition": "minecraft:entity_properties",
                "predicate": {"equipment": {"offhand": {"items": "minecraft:ender_eye"}}}}"#,
        );
        assert!(c.requires_offhand("minecraft:ender_eye"));
    }

    #[test]
    fn entity_properties_without_equipment() {
        let c = parse(
            r#"{"condition": "minecraft:entity_properties",
                "predicate": {"flags": {"is_on_fire": true}}}"#,
        );
        assert!(!c.requires_offhand("minecraft:ender_eye"));
    }

    #[test]
    fn unknown_condition_is_other() {
        let c = parse(r#"{"condition": "minecraft:killed_by_player"}"#);
        assert_eq!(c, Condition::Other);
        assert!(!c.requires_offhand("minecraft:ender_eye"));
        assert_eq!(c.random_chance(), None);
    }
}
