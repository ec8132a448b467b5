//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new value.
///
/// - **Value Object**: `Price(2900)` equals any other `Price(2900)`
/// - **Entity**: a `Plan` is identified by its `PlanId`, whatever its prices
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
