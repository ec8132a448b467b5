//! Simulated payment processing.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use planpick_catalog::BillingMode;
use planpick_core::{AddonId, PlanId, Price};

/// What is being paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub billing_mode: BillingMode,
    pub addon_ids: Vec<AddonId>,
    pub total: Price,
    pub email: String,
    pub card_last4: String,
}

/// Confirmation of a (simulated) successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub confirmation_id: Uuid,
    pub plan_id: PlanId,
    pub plan_name: String,
    pub billing_mode: BillingMode,
    pub addon_ids: Vec<AddonId>,
    pub total: Price,
    pub email: String,
    pub card_last4: String,
    pub processed_at: DateTime<Utc>,
}

/// Stand-in for a payment gateway: waits `delay`, then always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay; for tests and local tooling.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn submit(&self, order: Order) -> Receipt {
        tracing::info!(
            plan_id = %order.plan_id,
            billing_mode = %order.billing_mode,
            total_cents = order.total.cents(),
            delay_ms = self.delay.as_millis() as u64,
            "processing simulated payment"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = Receipt {
            confirmation_id: Uuid::now_v7(),
            plan_id: order.plan_id,
            plan_name: order.plan_name,
            billing_mode: order.billing_mode,
            addon_ids: order.addon_ids,
            total: order.total,
            email: order.email,
            card_last4: order.card_last4,
            processed_at: Utc::now(),
        };
        tracing::info!(confirmation_id = %receipt.confirmation_id, "payment accepted");
        receipt
    }
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            plan_id: PlanId::new("pro"),
            plan_name: "Pro".into(),
            billing_mode: BillingMode::Monthly,
            addon_ids: vec![AddonId::new("extra-storage")],
            total: Price::from_major(39),
            email: "jane@example.com".into(),
            card_last4: "4242".into(),
        }
    }

    #[test]
    fn default_delay_is_two_seconds() {
        assert_eq!(PaymentSimulator::default(), PaymentSimulator::new(Duration::from_secs(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_waits_for_the_configured_delay() {
        let sim = PaymentSimulator::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        let receipt = sim.submit(order()).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.total, Price::from_major(39));
        assert_eq!(receipt.plan_id.as_str(), "pro");
    }

    #[tokio::test]
    async fn each_receipt_gets_a_fresh_confirmation_id() {
        let sim = PaymentSimulator::instant();
        let a = sim.submit(order()).await;
        let b = sim.submit(order()).await;
        assert_ne!(a.confirmation_id, b.confirmation_id);
        assert_eq!(a.card_last4, "4242");
    }
}
