//! Mock checkout: form validation, input formatting and simulated payment.
//!
//! No real payment processing happens here; the simulator only waits and
//! issues a receipt.

pub mod form;
pub mod format;
pub mod payment;
pub mod service;

pub use form::{CheckoutForm, Field, FieldErrors, validate};
pub use format::{format_card_number, format_expiry_date};
pub use payment::{Order, PaymentSimulator, Receipt};
pub use service::{CheckoutError, CheckoutService};
