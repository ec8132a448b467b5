//! Checkout orchestration: decode selection → price → validate → pay.

use std::sync::Arc;

use thiserror::Error;

use planpick_catalog::Catalog;
use planpick_core::{DomainError, PlanId};
use planpick_pricing::{Quote, Selection, SelectionParams};

use crate::form::{CheckoutForm, FieldErrors, validate};
use crate::payment::{Order, PaymentSimulator, Receipt};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The shareable parameters could not be decoded (e.g. no plan).
    #[error("invalid selection: {0}")]
    Selection(#[from] DomainError),

    /// The plan no longer exists in the catalog.
    #[error("unknown plan: {0}")]
    UnknownPlan(PlanId),

    #[error("invalid form: {0}")]
    InvalidForm(FieldErrors),
}

pub struct CheckoutService {
    catalog: Arc<Catalog>,
    payments: PaymentSimulator,
}

impl CheckoutService {
    pub fn new(catalog: Arc<Catalog>, payments: PaymentSimulator) -> Self {
        Self { catalog, payments }
    }

    /// Order summary for the checkout screen, priced from the parameters alone.
    pub fn summary(&self, params: &SelectionParams) -> Result<(Selection, Quote), CheckoutError> {
        let selection = Selection::from_params(params)?;
        let quote = selection
            .quote(&self.catalog)
            .ok_or_else(|| CheckoutError::UnknownPlan(selection.plan_id().clone()))?;
        Ok((selection, quote))
    }

    /// Validate the form and run the simulated payment.
    pub async fn checkout(
        &self,
        params: &SelectionParams,
        form: &CheckoutForm,
    ) -> Result<Receipt, CheckoutError> {
        let (selection, quote) = self.summary(params)?;

        if let Err(errors) = validate(form) {
            tracing::debug!(invalid_fields = errors.len(), "checkout form rejected");
            return Err(CheckoutError::InvalidForm(errors));
        }

        // Only add-ons that priced into the quote end up on the order.
        let addon_ids = selection
            .addon_ids()
            .iter()
            .filter(|id| self.catalog.find_addon(id.as_str()).is_some())
            .cloned()
            .collect();

        let order = Order {
            plan_id: selection.plan_id().clone(),
            plan_name: quote.plan.name.clone(),
            billing_mode: quote.billing_mode,
            addon_ids,
            total: quote.total,
            email: form.email.trim().to_string(),
            card_last4: form.card_last4(),
        };

        Ok(self.payments.submit(order).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use planpick_catalog::BillingMode;
    use planpick_core::Price;

    fn service() -> CheckoutService {
        CheckoutService::new(Arc::new(Catalog::standard()), PaymentSimulator::instant())
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            email: " jane@example.com ".into(),
            full_name: "Jane Doe".into(),
            card_number: "4242 4242 4242 1881".into(),
            expiry_date: "08/28".into(),
            cvv: "737".into(),
            billing_address: "1 Infinite Loop".into(),
            city: "Cupertino".into(),
            zip_code: "95014".into(),
            country: "United States".into(),
        }
    }

    #[test]
    fn summary_reprices_from_params() {
        let params = SelectionParams::from_query_string("plan=pro&billing=yearly&addons=extra-storage");
        let (selection, quote) = service().summary(&params).unwrap();
        assert_eq!(selection.billing_mode(), BillingMode::Yearly);
        assert_eq!(quote.total, Price::from_major(390));
    }

    #[test]
    fn summary_rejects_missing_and_unknown_plans() {
        let missing = service().summary(&SelectionParams::default()).unwrap_err();
        assert!(matches!(missing, CheckoutError::Selection(_)));

        let params = SelectionParams::from_query_string("plan=platinum");
        let unknown = service().summary(&params).unwrap_err();
        assert_eq!(unknown, CheckoutError::UnknownPlan(PlanId::new("platinum")));
    }

    #[tokio::test]
    async fn checkout_issues_a_receipt_for_a_valid_form() {
        let params = SelectionParams::from_query_string(
            "plan=team&billing=monthly&addons=extra-storage,premium-support,retired",
        );
        let receipt = service().checkout(&params, &form()).await.unwrap();
        assert_eq!(receipt.plan_name, "Team");
        assert_eq!(receipt.total, Price::from_major(124));
        assert_eq!(receipt.addon_ids.len(), 2);
        assert_eq!(receipt.email, "jane@example.com");
        assert_eq!(receipt.card_last4, "1881");
    }

    #[tokio::test]
    async fn checkout_reports_field_errors() {
        let params = SelectionParams::from_query_string("plan=starter");
        let bad = CheckoutForm {
            cvv: "12".into(),
            country: String::new(),
            ..form()
        };
        match service().checkout(&params, &bad).await.unwrap_err() {
            CheckoutError::InvalidForm(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors.get(Field::Cvv), Some("CVV must be 3-4 digits"));
                assert_eq!(errors.get(Field::Country), Some("Country is required"));
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn checkout_rejects_bad_billing_mode_before_validating_the_form() {
        let params = SelectionParams::from_query_string("plan=starter&billing=hourly");
        let err = service().checkout(&params, &CheckoutForm::default()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Selection(DomainError::Validation(_))));
    }
}
