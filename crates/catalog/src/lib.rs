//! Catalog domain module.
//!
//! Immutable plan and add-on definitions with dual (monthly/yearly) pricing.
//! Pure data + lookups (no IO beyond parsing a catalog document handed in by
//! the caller).

pub mod billing;
pub mod catalog;
pub mod item;

pub use billing::BillingMode;
pub use catalog::Catalog;
pub use item::{Addon, Plan, PlanFeature};
