//! Statement computation and rendering.
//!
//! Computation and presentation are separate steps: [`Statement::compute`]
//! resolves every line and sums the totals in cents, then the `Display` impl
//! turns the finished statement into text. A failure in any line aborts the
//! whole computation, so there is never a truncated report.

use serde::Serialize;

use theater_core::{PlayId, StatementError, StatementResult};

use crate::format::usd;
use crate::invoice::Invoice;
use crate::play::{Catalog, Genre};

/// One computed statement line (one performance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub play_id: PlayId,
    pub play_name: String,
    pub genre: Genre,
    pub audience: u32,
    /// Charge in cents.
    pub amount: u64,
    pub credits: u64,
}

/// A fully computed statement for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    customer: String,
    lines: Vec<StatementLine>,
    total_amount: u64,
    total_credits: u64,
}

impl Statement {
    /// Price every performance of `invoice` against `catalog`.
    ///
    /// Fails with `UnknownPlay` or `UnknownGenre` on the first performance
    /// that cannot be resolved.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(customer = invoice.customer(), performances = invoice.performances().len())
    )]
    pub fn compute(invoice: &Invoice, catalog: &Catalog) -> StatementResult<Self> {
        let mut lines = Vec::with_capacity(invoice.performances().len());

        for performance in invoice.performances() {
            let play = catalog.play_for(performance)?;
            let genre = play.genre()?;
            let audience = performance.audience();
            let amount = genre.amount_for(audience);
            let credits = genre.credits_for(audience);

            tracing::debug!(
                play_id = %performance.play_id(),
                %genre,
                audience,
                amount,
                credits,
                "priced performance"
            );

            lines.push(StatementLine {
                play_id: performance.play_id().clone(),
                play_name: play.name().to_owned(),
                genre,
                audience,
                amount,
                credits,
            });
        }

        let total_amount = checked_total(lines.iter().map(|line| line.amount))?;
        let total_credits = checked_total(lines.iter().map(|line| line.credits))?;

        Ok(Self {
            customer: invoice.customer().to_owned(),
            lines,
            total_amount,
            total_credits,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    /// Amount owed, in cents.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_credits(&self) -> u64 {
        self.total_credits
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Statement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Statement for {}", self.customer)?;
        for line in &self.lines {
            writeln!(
                f,
                "  {}: {} ({} seats)",
                line.play_name,
                usd(line.amount),
                line.audience
            )?;
        }
        writeln!(f, "Amount owed is {}", usd(self.total_amount))?;
        writeln!(f, "You earned {} credits", self.total_credits)
    }
}

/// Sum line values, failing with `AmountOverflow` instead of wrapping.
fn checked_total(values: impl IntoIterator<Item = u64>) -> StatementResult<u64> {
    values.into_iter().try_fold(0u64, |total, value| {
        total
            .checked_add(value)
            .ok_or(StatementError::AmountOverflow)
    })
}

/// Render the text statement for `invoice`.
pub fn render(invoice: &Invoice, catalog: &Catalog) -> StatementResult<String> {
    Statement::compute(invoice, catalog).map(|statement| statement.render_text())
}

/// Borrowing printer bound to one invoice and catalog.
#[derive(Debug, Clone, Copy)]
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    plays: &'a Catalog,
}

impl<'a> StatementPrinter<'a> {
    pub fn new(invoice: &'a Invoice, plays: &'a Catalog) -> Self {
        Self { invoice, plays }
    }

    pub fn invoice(&self) -> &'a Invoice {
        self.invoice
    }

    pub fn plays(&self) -> &'a Catalog {
        self.plays
    }

    pub fn compute(&self) -> StatementResult<Statement> {
        Statement::compute(self.invoice, self.plays)
    }

    pub fn statement(&self) -> StatementResult<String> {
        render(self.invoice, self.plays)
    }
}
