//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attribute values.
/// To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ValidationError { message: String }
///
/// impl ValueObject for ValidationError {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
