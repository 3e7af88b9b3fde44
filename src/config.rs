//! Namer configuration.
//!
//! Settings load from YAML (JSON parses too). Every field has a default, so
//! an empty document is a valid configuration.
//!
//! ```yaml
//! profile: context-insensitive
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorKind, NomenError};

/// How literals and `this` member accesses take their surroundings into account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Numeric literals under a parent are named by their digits (`list[0]`
    /// gives `list0`) and `this.x` also offers `myX`.
    #[default]
    ContextSensitive,
    /// Numeric literals are always `number`; `this.x` is treated like any
    /// other member access.
    ContextInsensitive,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::ContextSensitive, Profile::ContextInsensitive];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::ContextSensitive => "context-sensitive",
            Profile::ContextInsensitive => "context-insensitive",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = NomenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| {
                NomenError::bare(ErrorKind::Config {
                    message: format!("unknown profile '{s}'"),
                })
                .with_help("expected `context-sensitive` or `context-insensitive`")
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamerConfig {
    pub profile: Profile,
}

impl NamerConfig {
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    /// Parses a YAML document. Unknown keys are rejected.
    pub fn from_yaml_str(text: &str) -> Result<Self, NomenError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| {
            NomenError::bare(ErrorKind::Config {
                message: e.to_string(),
            })
        })
    }

    pub fn load(path: &Path) -> Result<Self, NomenError> {
        log::debug!("loading namer configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            NomenError::bare(ErrorKind::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::from_yaml_str(&text)
    }
}
