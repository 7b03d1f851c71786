use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Direction in which a high intake of an indicator moves the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorPolarity {
    Positive,
    Inverse,
}

/// One of the eight JDI8 food-group indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Rice,
    MisoSoup,
    Seaweed,
    Pickles,
    GreenYellowVeg,
    Fish,
    GreenTea,
    BeefPork,
}

impl Indicator {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Rice,
            Self::MisoSoup,
            Self::Seaweed,
            Self::Pickles,
            Self::GreenYellowVeg,
            Self::Fish,
            Self::GreenTea,
            Self::BeefPork,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::MisoSoup => "miso_soup",
            Self::Seaweed => "seaweed",
            Self::Pickles => "pickles",
            Self::GreenYellowVeg => "green_yellow_veg",
            Self::Fish => "fish",
            Self::GreenTea => "green_tea",
            Self::BeefPork => "beef_pork",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::MisoSoup => "Miso Soup",
            Self::Seaweed => "Seaweed",
            Self::Pickles => "Pickles",
            Self::GreenYellowVeg => "Green & Yellow Vegetables",
            Self::Fish => "Fish",
            Self::GreenTea => "Green Tea",
            Self::BeefPork => "Beef & Pork",
        }
    }

    pub const fn polarity(self) -> IndicatorPolarity {
        match self {
            Self::BeefPork => IndicatorPolarity::Inverse,
            _ => IndicatorPolarity::Positive,
        }
    }

    /// Exact wire-key lookup. Case and surrounding whitespace matter.
    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|indicator| indicator.key() == raw)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// High/low intake answers for the eight indicators.
///
/// Only the eight exact wire keys are consulted; anything missing reads as
/// "not high".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct IntakeAnswers {
    high_intake: BTreeMap<Indicator, bool>,
}

impl IntakeAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, indicator: Indicator, high_intake: bool) -> Self {
        self.set(indicator, high_intake);
        self
    }

    pub fn set(&mut self, indicator: Indicator, high_intake: bool) {
        self.high_intake.insert(indicator, high_intake);
    }

    pub fn is_high(&self, indicator: Indicator) -> bool {
        self.high_intake.get(&indicator).copied().unwrap_or(false)
    }

    /// Coerces an arbitrary JSON payload into answers. Non-object payloads
    /// yield the all-low default.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_pairs(map.iter()),
            _ => Self::default(),
        }
    }

    fn from_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a Value)>) -> Self {
        pairs
            .filter_map(|(key, value)| {
                Indicator::from_key(key).map(|indicator| (indicator, is_truthy(value)))
            })
            .fold(Self::default(), |answers, (indicator, high)| {
                answers.with(indicator, high)
            })
    }
}

/// Serializes to the flat `{ "rice": true, ... }` shape accepted on input.
impl Serialize for IntakeAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.high_intake
                .iter()
                .map(|(indicator, high)| (indicator.key(), high)),
        )
    }
}

impl From<BTreeMap<String, Value>> for IntakeAnswers {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        Self::from_pairs(raw.iter())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Adherence score on the 0..=8 JDI8 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Jdi8Score(u8);

impl Jdi8Score {
    pub const MAX: u8 = 8;

    pub(crate) const fn from_points(points: u8) -> Self {
        Self(if points > Self::MAX { Self::MAX } else { points })
    }

    /// Clamps an externally supplied value into range.
    pub fn saturating(value: u64) -> Self {
        Self::from_points(value.min(Self::MAX as u64) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Jdi8Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Risk-reduction band derived from a score. `High` is the favourable band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Moderate,
    High,
}

impl Tier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High (14% lower mortality risk)",
        }
    }

    pub fn badge_text(self) -> String {
        format!("RISK REDUCTION: {}", self.label().to_uppercase())
    }
}
