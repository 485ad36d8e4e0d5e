//! Period envelope for lightweight first-pass deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{DeclarationError, PeriodKind, Result};
use crate::period::Period;

/// First-pass view of a declaration entry: only the `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
}

impl PeriodEnvelope {
    /// Parse the `type` field into a typed [`PeriodKind`].
    pub fn period_kind(&self) -> Result<PeriodKind> {
        self.kind.parse()
    }
}

impl Period {
    /// Two-pass decode of a single raw period record.
    pub fn from_value(raw: Value) -> Result<Period> {
        let kind = PeriodEnvelope::deserialize(&raw)?.period_kind()?;
        decode_kind(kind, raw).map_err(|source| DeclarationError::InvalidPeriod { kind, source })
    }

    /// Two-pass decode of the `index`-th entry of a declaration.
    pub(crate) fn from_indexed_value(index: usize, raw: Value) -> Result<Period> {
        let kind = PeriodEnvelope::deserialize(&raw)?.period_kind()?;
        decode_kind(kind, raw).map_err(|source| DeclarationError::InvalidEntry {
            index,
            kind,
            source,
        })
    }
}

fn decode_kind(kind: PeriodKind, raw: Value) -> serde_json::Result<Period> {
    let period = match kind {
        PeriodKind::Weekly => Period::Weekly(serde_json::from_value(raw)?),
        PeriodKind::Daily => Period::Daily(serde_json::from_value(raw)?),
        PeriodKind::Once => Period::Once(serde_json::from_value(raw)?),
        PeriodKind::Never => Period::Never(serde_json::from_value(raw)?),
        PeriodKind::Always => Period::Always(serde_json::from_value(raw)?),
    };
    Ok(period)
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Period::from_value(raw).map_err(serde::de::Error::custom)
    }
}
