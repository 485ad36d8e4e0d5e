//! Descriptive metadata carried by every period.

use serde::{Deserialize, Serialize};

/// Name and description of a period. No behavioral role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodLabel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl PeriodLabel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
