//! Theater billing: pricing, volume credits and statement rendering.
//!
//! Everything here is deterministic domain logic (no IO). Amounts are integer
//! cents end to end; only [`format::usd`] turns them into text.

pub mod credits;
pub mod format;
pub mod invoice;
pub mod play;
pub mod pricing;
pub mod statement;

pub use credits::volume_credits;
pub use format::usd;
pub use invoice::{Invoice, Performance};
pub use play::{Catalog, Genre, Play};
pub use pricing::amount;
pub use statement::{Statement, StatementLine, StatementPrinter, render};

pub use theater_core::{PlayId, StatementError, StatementResult};
