//! Strongly-typed identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StatementError;

/// Catalog key of a play (e.g. `"hamlet"`).
///
/// The id is not stored on the play itself; performances reference plays
/// through it and the catalog resolves it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PlayId> for String {
    fn from(value: PlayId) -> Self {
        value.0
    }
}

impl FromStr for PlayId {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(StatementError::validation("PlayId: must not be blank"));
        }
        Ok(Self(s.to_owned()))
    }
}
