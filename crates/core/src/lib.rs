//! `theater-core` — shared building blocks for theater billing.
//!
//! This crate contains **pure** primitives (no IO, no formatting concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{StatementError, StatementResult};
pub use id::PlayId;
pub use value_object::ValueObject;
