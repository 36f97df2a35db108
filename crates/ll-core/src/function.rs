//! Entry functions.
//!
//! Only `minecraft:set_count` carries meaning for probability display. Its
//! count is classified once, at deserialization time, into a closed [`Count`]
//! so nothing downstream has to sniff JSON shapes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A function applied to an entry's output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "function")]
pub enum Function {
    /// Sets the stack size of the dropped item.
    #[serde(rename = "minecraft:set_count")]
    SetCount {
        /// The declared count, or `None` when absent or malformed.
        #[serde(default, deserialize_with = "deserialize_count")]
        count: Option<Count>,
    },
    /// Any other function; ignored.
    #[serde(other)]
    Other,
}

/// A resolved item count: either a fixed number or an inclusive range.
///
/// Serializes as a number (`5`) or as its display string (`"1–3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Exactly this many.
    Fixed(i64),
    /// Between `min` and `max`, inclusive.
    Range {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
}

impl Count {
    /// Build a range, collapsing `min == max` to a fixed count.
    pub fn range(min: i64, max: i64) -> Self {
        if min == max {
            Self::Fixed(min)
        } else {
            Self::Range { min, max }
        }
    }

    /// Returns true when the count says nothing drops (`0`).
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Fixed(0))
    }

    /// The largest number of items this count can produce.
    pub fn max(self) -> i64 {
        match self {
            Self::Fixed(n) => n,
            Self::Range { max, .. } => max,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Range { min, max } => write!(f, "{min}–{max}"),
        }
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(n) => serializer.serialize_i64(*n),
            Self::Range { .. } => serializer.collect_str(self),
        }
    }
}

/// The count shapes that appear in real data files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Scalar(f64),
    Bounds { min: f64, max: f64 },
    Unrecognized(serde_json::Value),
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

impl RawCount {
    fn classify(self) -> Option<Count> {
        match self {
            Self::Scalar(n) => integral(n).map(Count::Fixed),
            Self::Bounds { min, max } => Some(Count::range(integral(min)?, integral(max)?)),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Deserialize a number provider into a [`Count`], yielding `None` for any
/// shape that is not a plain integer or a `{min, max}` object.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<Count>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCount>::deserialize(deserializer)?;
    Ok(raw.and_then(RawCount::classify))
}
