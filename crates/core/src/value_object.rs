//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A [`UserProfile`](crate::UserProfile) is one: two
//! profiles with the same names and bio are interchangeable, while two
//! [`User`](crate::User)s are distinguished by their id.

/// Marker trait for value objects.
///
/// Requires:
/// - **Clone**: value objects are copied, never shared by reference
/// - **PartialEq**: compared by attribute values
/// - **Debug**: for logging and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
