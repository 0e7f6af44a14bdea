use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The analysis brief: which account the report is for and which
/// competitor accounts to compare it against.
///
/// Usernames are matched case-sensitively against the loaded profile
/// table, so the brief must use the exact handles from the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    /// The client's own username; rankings highlight it when present.
    pub client: String,
    pub competitors: Vec<String>,
}

impl Brief {
    /// All usernames covered by this brief, client first.
    #[must_use]
    pub fn usernames(&self) -> Vec<&str> {
        std::iter::once(self.client.as_str())
            .chain(self.competitors.iter().map(String::as_str))
            .collect()
    }
}

/// Load and validate the analysis brief from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_brief(path: &Path) -> Result<Brief, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BriefFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brief: Brief = serde_yaml::from_str(&content).map_err(ConfigError::BriefFileParse)?;

    validate_brief(&brief)?;

    Ok(brief)
}

fn validate_brief(brief: &Brief) -> Result<(), ConfigError> {
    if brief.client.trim().is_empty() {
        return Err(ConfigError::Validation(
            "brief client must be non-empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    seen.insert(brief.client.as_str());

    for username in &brief.competitors {
        if username.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brief competitor usernames must be non-empty".to_string(),
            ));
        }
        if !seen.insert(username.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate username in brief: '{username}'"
            )));
        }
    }

    Ok(())
}
