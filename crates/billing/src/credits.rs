//! Loyalty volume credits.

use theater_core::StatementResult;

use crate::invoice::Performance;
use crate::play::{Genre, Play};

pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
/// Comedies earn one extra credit per this many attendees.
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

impl Genre {
    /// Volume credits earned by one performance of this genre.
    pub fn credits_for(self, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD));
        match self {
            Genre::Comedy => base + u64::from(audience / COMEDY_EXTRA_VOLUME_FACTOR),
            Genre::Tragedy => base,
        }
    }
}

/// Volume credits for `performance` of `play`.
pub fn volume_credits(performance: &Performance, play: &Play) -> StatementResult<u64> {
    Ok(play.genre()?.credits_for(performance.audience()))
}
