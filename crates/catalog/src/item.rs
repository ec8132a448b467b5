use serde::{Deserialize, Serialize};

use planpick_core::{AddonId, Entity, PlanId, Price, ValueObject};

use crate::billing::BillingMode;

/// One row of a plan's feature list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

impl PlanFeature {
    pub fn included(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            included: true,
        }
    }

    pub fn excluded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            included: false,
        }
    }
}

impl ValueObject for PlanFeature {}

/// Subscription tier with dual pricing.
///
/// The yearly price is authored independently; it is never derived from the
/// monthly price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    name: String,
    description: String,
    monthly_price: Price,
    yearly_price: Price,
    #[serde(default)]
    features: Vec<PlanFeature>,
    #[serde(default)]
    popular: bool,
}

impl Plan {
    pub fn new(
        id: impl Into<PlanId>,
        name: impl Into<String>,
        description: impl Into<String>,
        monthly_price: Price,
        yearly_price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            monthly_price,
            yearly_price,
            features: Vec::new(),
            popular: false,
        }
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = PlanFeature>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    pub fn marked_popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn monthly_price(&self) -> Price {
        self.monthly_price
    }

    pub fn yearly_price(&self) -> Price {
        self.yearly_price
    }

    pub fn features(&self) -> &[PlanFeature] {
        &self.features
    }

    pub fn is_popular(&self) -> bool {
        self.popular
    }

    /// Active price for the given cadence.
    pub fn price_for(&self, mode: BillingMode) -> Price {
        match mode {
            BillingMode::Monthly => self.monthly_price,
            BillingMode::Yearly => self.yearly_price,
        }
    }
}

impl Entity for Plan {
    type Id = PlanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Optional supplementary charge layered on top of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    id: AddonId,
    name: String,
    description: String,
    monthly_price: Price,
    yearly_price: Price,
}

impl Addon {
    pub fn new(
        id: impl Into<AddonId>,
        name: impl Into<String>,
        description: impl Into<String>,
        monthly_price: Price,
        yearly_price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            monthly_price,
            yearly_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn monthly_price(&self) -> Price {
        self.monthly_price
    }

    pub fn yearly_price(&self) -> Price {
        self.yearly_price
    }

    /// Active price for the given cadence.
    pub fn price_for(&self, mode: BillingMode) -> Price {
        match mode {
            BillingMode::Monthly => self.monthly_price,
            BillingMode::Yearly => self.yearly_price,
        }
    }
}

impl Entity for Addon {
    type Id = AddonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
