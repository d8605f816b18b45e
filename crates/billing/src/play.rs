use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use theater_core::{PlayId, StatementError, StatementResult, ValueObject};

use crate::invoice::Performance;

/// Genre of a play; selects its pricing and credit formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Genre {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(StatementError::unknown_genre(other)),
        }
    }
}

/// A play in the catalog.
///
/// The genre is kept as the catalog supplied it, since catalogs are usually
/// loaded from external data. It is resolved to a [`Genre`] when a statement
/// is computed, so an unsupported value fails that statement and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    name: String,
    #[serde(rename = "type", alias = "genre")]
    genre: String,
}

impl ValueObject for Play {}

impl Play {
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre: genre.as_str().to_owned(),
        }
    }

    /// Build a play from an unchecked genre string.
    pub fn with_raw_genre(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_genre(&self) -> &str {
        &self.genre
    }

    /// Resolve the genre, failing with `UnknownGenre` for unsupported values.
    pub fn genre(&self) -> StatementResult<Genre> {
        self.genre.parse()
    }
}

/// Immutable mapping from play id to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    pub fn new(plays: HashMap<PlayId, Play>) -> Self {
        Self { plays }
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    /// Look up the play a performance refers to.
    pub fn play_for(&self, performance: &Performance) -> StatementResult<&Play> {
        self.plays
            .get(performance.play_id())
            .ok_or_else(|| StatementError::UnknownPlay(performance.play_id().clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

impl From<HashMap<PlayId, Play>> for Catalog {
    fn from(plays: HashMap<PlayId, Play>) -> Self {
        Self::new(plays)
    }
}

impl<K: Into<PlayId>> FromIterator<(K, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
