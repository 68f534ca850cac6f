//! GitHub repository identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// An `owner/name` repository identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ReleaseError::InvalidRepository {
            input: input.to_string(),
        };

        let (owner, name) = input.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// API path of the latest release
    pub fn latest_release_path(&self) -> String {
        format!("/repos/{}/{}/releases/latest", self.owner, self.name)
    }

    /// Environment variable name: `cloudflare/cloudflared` becomes
    /// `CLOUDFLARE_CLOUDFLARED_VERSION`
    pub fn version_var(&self) -> String {
        format!("{}_VERSION", normalize(&self.to_string()))
    }
}

impl FromStr for RepoId {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Uppercase, then replace every character outside `[A-Z0-9]` with `_`
pub fn normalize(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}
