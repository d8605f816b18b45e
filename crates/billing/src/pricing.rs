//! Per-performance charges, in cents.

use theater_core::StatementResult;

use crate::invoice::Performance;
use crate::play::{Genre, Play};

pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: u64 = 1_000;

pub const COMEDY_BASE_AMOUNT: u64 = 30_000;
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: u64 = 10_000;
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: u64 = 500;
pub const COMEDY_AMOUNT_PER_AUDIENCE: u64 = 300;

impl Genre {
    /// Charge for one performance of this genre with `audience` seats taken.
    pub fn amount_for(self, audience: u32) -> u64 {
        let audience_u64 = u64::from(audience);
        match self {
            Genre::Tragedy => {
                let mut result = TRAGEDY_BASE_AMOUNT;
                if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                    result += TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON
                        * u64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD);
                }
                result
            }
            Genre::Comedy => {
                let mut result = COMEDY_BASE_AMOUNT;
                if audience > COMEDY_AUDIENCE_THRESHOLD {
                    result += COMEDY_OVER_BASE_CAPACITY_AMOUNT
                        + COMEDY_OVER_BASE_CAPACITY_PER_PERSON
                            * u64::from(audience - COMEDY_AUDIENCE_THRESHOLD);
                }
                result + COMEDY_AMOUNT_PER_AUDIENCE * audience_u64
            }
        }
    }
}

/// Amount owed for `performance` of `play`, in cents.
///
/// Fails with `UnknownGenre` when the play's genre is not supported.
pub fn amount(performance: &Performance, play: &Play) -> StatementResult<u64> {
    Ok(play.genre()?.amount_for(performance.audience()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use theater_core::StatementError;

    #[test]
    fn tragedy_at_threshold_is_base_amount() {
        assert_eq!(Genre::Tragedy.amount_for(30), 40_000);
        assert_eq!(Genre::Tragedy.amount_for(0), 40_000);
    }

    #[test]
    fn tragedy_over_threshold_adds_per_person() {
        assert_eq!(Genre::Tragedy.amount_for(35), 45_000);
        assert_eq!(Genre::Tragedy.amount_for(55), 65_000);
    }

    #[test]
    fn comedy_charges_per_attendee_below_threshold() {
        assert_eq!(Genre::Comedy.amount_for(20), 36_000);
        assert_eq!(Genre::Comedy.amount_for(0), 30_000);
    }

    #[test]
    fn comedy_over_threshold_adds_fixed_and_per_person() {
        assert_eq!(Genre::Comedy.amount_for(21), 30_000 + 10_000 + 500 + 6_300);
        assert_eq!(Genre::Comedy.amount_for(25), 50_000);
    }

    #[test]
    fn unknown_genre_fails() {
        let play = Play::with_raw_genre("Henry V", "history");
        let err = amount(&Performance::new("henry-v", 10), &play).unwrap_err();
        assert_eq!(err, StatementError::UnknownGenre("history".to_string()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: tragedy pricing matches the tiered formula.
        #[test]
        fn tragedy_amount_formula(audience in 0u32..10_000) {
            let expected = if audience <= 30 {
                40_000
            } else {
                40_000 + 1_000 * u64::from(audience - 30)
            };
            let play = Play::new("Hamlet", Genre::Tragedy);
            prop_assert_eq!(amount(&Performance::new("hamlet", audience), &play).unwrap(), expected);
        }

        /// Property: comedy pricing matches the tiered formula plus the flat surcharge.
        #[test]
        fn comedy_amount_formula(audience in 0u32..10_000) {
            let a = u64::from(audience);
            let expected = if audience <= 20 {
                30_000 + 300 * a
            } else {
                30_000 + 10_000 + 500 * (a - 20) + 300 * a
            };
            let play = Play::new("As You Like It", Genre::Comedy);
            prop_assert_eq!(amount(&Performance::new("as-like", audience), &play).unwrap(), expected);
        }

        /// Property: a bigger audience never costs less.
        #[test]
        fn amount_is_monotonic_in_audience(audience in 0u32..u32::MAX) {
            for genre in [Genre::Tragedy, Genre::Comedy] {
                prop_assert!(genre.amount_for(audience + 1) >= genre.amount_for(audience));
            }
        }
    }
}
