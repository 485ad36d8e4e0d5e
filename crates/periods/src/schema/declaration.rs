//! Top-level declaration document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::Result;
use crate::period::Period;

/// Raw declaration: the list of entries before per-entry decoding.
///
/// A missing `periods` key decodes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(default)]
    pub periods: Vec<Value>,
}

impl Declaration {
    /// Decode every entry in declaration order, failing on the first bad one.
    pub fn into_periods(self) -> Result<Vec<Period>> {
        self.periods
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let period = Period::from_indexed_value(index, raw)?;
                debug!(index, kind = %period.kind(), name = %period.name(), "decoded period");
                Ok(period)
            })
            .collect()
    }
}
