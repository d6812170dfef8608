//! Optional settings file (`~/.config/opn/config.toml`).

mod ops;

use serde::{Deserialize, Serialize};

/// User settings. Every field has a default, so a missing file is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How targets are opened.
    pub open: OpenConfig,
    /// How `opn add` behaves.
    pub add: AddConfig,
}

/// `[open]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Command used instead of the platform opener, e.g. "code -r".
    /// The target is appended as the last argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// `[add]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddConfig {
    /// What to do when the alias being added already exists.
    pub duplicates: DuplicatePolicy,
}

/// Handling of `opn add` for a name that is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Append anyway; the newer line wins when the file is read.
    #[default]
    Shadow,
    /// Refuse to add the alias.
    Reject,
}

impl DuplicatePolicy {
    /// Name used in the settings file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shadow => "shadow",
            Self::Reject => "reject",
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "shadow" => Ok(Self::Shadow),
            "reject" => Ok(Self::Reject),
            _ => anyhow::bail!("Invalid duplicates policy: {s} (expected shadow or reject)"),
        }
    }
}

#[cfg(test)]
mod tests;
