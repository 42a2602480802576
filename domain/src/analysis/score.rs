//! Bounded 0-100 scores (confidence, contradiction severity).

use serde::{Deserialize, Deserializer};

/// Upper bound of every score in an analysis.
pub const MAX_SCORE: u8 = 100;

/// Clamp a model-reported number into `0..=100`.
///
/// Fractions in `0.0..=1.0` are *not* rescaled; models are asked for
/// percentages and a `0.7` is read as (rounded) `1`. NaN maps to `0`.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, MAX_SCORE as f64) as u8
}

/// Deserialize any JSON number (or numeric string) into a clamped score.
pub fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScore::deserialize(deserializer)?;
    raw.to_f64()
        .map(clamp_score)
        .ok_or_else(|| serde::de::Error::custom("score is not a number"))
}

/// Like [`deserialize_score`] for optional fields (`null` → `None`).
pub fn deserialize_optional_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScore>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .to_f64()
            .map(|v| Some(clamp_score(v)))
            .ok_or_else(|| serde::de::Error::custom("score is not a number")),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    fn to_f64(&self) -> Option<f64> {
        match self {
            RawScore::Number(n) => Some(*n),
            RawScore::Text(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        }
    }
}
