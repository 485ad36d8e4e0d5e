//! Reading period declarations from strings and files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::PeriodSet;
use crate::schema::{Declaration, DeclarationError, Result};

/// Serialization format of a declaration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Json,
    Yaml,
}

impl DeclarationFormat {
    /// `.json` → JSON, `.yml` / `.yaml` → YAML (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(DeclarationFormat::Json),
            Some("yml") | Some("yaml") => Ok(DeclarationFormat::Yaml),
            _ => Err(DeclarationError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl PeriodSet {
    /// Decode a JSON declaration (`{"periods": [...]}`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let declaration: Declaration = serde_json::from_str(json)?;
        Ok(Self::new(declaration.into_periods()?))
    }

    /// Decode a YAML declaration with the same shape as the JSON one.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let declaration: Declaration = serde_yaml::from_str(yaml)?;
        Ok(Self::new(declaration.into_periods()?))
    }

    /// Decode a string in the given format.
    pub fn parse(content: &str, format: DeclarationFormat) -> Result<Self> {
        match format {
            DeclarationFormat::Json => Self::from_json_str(content),
            DeclarationFormat::Yaml => Self::from_yaml_str(content),
        }
    }

    /// Load a declaration file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DeclarationFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "reading period declaration");

        let content = fs::read_to_string(path)?;
        let set = Self::parse(&content, format)?;

        info!(path = %path.display(), periods = set.len(), "loaded period declaration");
        Ok(set)
    }
}
