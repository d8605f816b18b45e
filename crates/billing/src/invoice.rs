use serde::{Deserialize, Serialize};

use theater_core::{PlayId, ValueObject};

/// One performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID", alias = "playId", alias = "play_id")]
    play_id: PlayId,
    audience: u32,
}

impl ValueObject for Performance {}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }

    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }
}

/// A customer's invoice. Performance order is the order of statement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl ValueObject for Invoice {}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}
