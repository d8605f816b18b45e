//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Plays,
/// performances and invoices are all built once by the caller and only read
/// while a statement is computed.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(30), Seats(30));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
