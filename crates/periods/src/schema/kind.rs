//! Period kind enum for two-pass deserialization dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DeclarationError;

/// Supported period kinds, matching the declaration `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Weekly,
    Daily,
    Once,
    Never,
    Always,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 5] = [
        PeriodKind::Weekly,
        PeriodKind::Daily,
        PeriodKind::Once,
        PeriodKind::Never,
        PeriodKind::Always,
    ];

    /// Whether periods of this kind have start/end occurrences.
    pub fn is_bounded(&self) -> bool {
        matches!(self, PeriodKind::Weekly | PeriodKind::Daily | PeriodKind::Once)
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKind::Weekly => write!(f, "weekly"),
            PeriodKind::Daily => write!(f, "daily"),
            PeriodKind::Once => write!(f, "once"),
            PeriodKind::Never => write!(f, "never"),
            PeriodKind::Always => write!(f, "always"),
        }
    }
}

impl FromStr for PeriodKind {
    type Err = DeclarationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(PeriodKind::Weekly),
            "daily" => Ok(PeriodKind::Daily),
            "once" => Ok(PeriodKind::Once),
            "never" => Ok(PeriodKind::Never),
            "always" => Ok(PeriodKind::Always),
            other => Err(DeclarationError::UnknownType(other.to_string())),
        }
    }
}
