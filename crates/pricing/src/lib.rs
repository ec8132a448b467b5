//! Pricing engine and selection-state model.
//!
//! Everything here is pure: functions take the immutable [`Catalog`] plus
//! caller-owned selection values and return prices. Unknown plan ids price at
//! zero and unknown add-on ids are skipped, so stale shareable links never fail.
//!
//! [`Catalog`]: planpick_catalog::Catalog

pub mod engine;
pub mod quote;
pub mod selection;

pub use engine::{calculate_total, yearly_savings};
pub use quote::{LineKind, Quote, QuoteLine, quote};
pub use selection::{DEFAULT_PLAN_ID, Selection, SelectionParams};
