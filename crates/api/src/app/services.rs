use std::sync::Arc;

use planpick_catalog::Catalog;
use planpick_checkout::{CheckoutService, PaymentSimulator};
use planpick_core::{Entity, PlanId};
use planpick_pricing::{DEFAULT_PLAN_ID, Selection};

use crate::config::ApiConfig;

/// Everything handlers need: the immutable catalog and the checkout flow.
pub struct AppServices {
    catalog: Arc<Catalog>,
    checkout: CheckoutService,
    default_plan: PlanId,
}

impl AppServices {
    /// Wire services around a catalog.
    ///
    /// The default plan is `pro` when the catalog has it, otherwise the first
    /// plan in display order.
    pub fn new(catalog: Catalog, payments: PaymentSimulator) -> Self {
        let default_plan = if catalog.contains_plan(DEFAULT_PLAN_ID) {
            PlanId::new(DEFAULT_PLAN_ID)
        } else {
            let first = catalog.list_plans()[0].id().clone();
            tracing::warn!(fallback = %first, "catalog has no '{DEFAULT_PLAN_ID}' plan");
            first
        };

        let catalog = Arc::new(catalog);
        Self {
            checkout: CheckoutService::new(catalog.clone(), payments),
            catalog,
            default_plan,
        }
    }

    /// Wire services from configuration.
    ///
    /// An explicitly configured default plan must exist in the catalog.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let catalog = config.load_catalog()?;
        if let Some(plan) = config.default_plan.as_deref().filter(|p| !catalog.contains_plan(p)) {
            anyhow::bail!("default plan '{plan}' is not in the catalog");
        }

        let mut services = Self::new(catalog, PaymentSimulator::new(config.payment_delay));
        if let Some(plan) = &config.default_plan {
            services.default_plan = PlanId::new(plan.as_str());
        }
        Ok(services)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn checkout(&self) -> &CheckoutService {
        &self.checkout
    }

    pub fn default_plan(&self) -> &PlanId {
        &self.default_plan
    }

    /// Fresh selection for a visitor entering the selector.
    pub fn default_selection(&self) -> Selection {
        Selection::new(self.default_plan.clone())
    }
}
