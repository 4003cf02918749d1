//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they have no
/// identity of their own. Two value objects with the same attribute values
/// are the same value. To "modify" one, construct a new one.
///
/// The trait bounds keep value objects cheap to pass around and easy to
/// assert on:
/// - **Clone**: values copy freely
/// - **PartialEq**: compared by attribute values
/// - **Debug**: printable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
