//! Selection state and its shareable parameter encoding.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use planpick_catalog::{BillingMode, Catalog};
use planpick_core::{AddonId, DomainError, DomainResult, PlanId, Price};

use crate::engine::calculate_total;
use crate::quote::{Quote, quote};

/// Plan preselected when a visitor lands on the selector.
pub const DEFAULT_PLAN_ID: &str = "pro";

/// Transient, client-owned choice of plan, billing cadence and add-ons.
///
/// Plan choice is single-select (replace), add-ons are independent toggles
/// with unique membership. Insertion order of add-ons is kept for display but
/// never affects pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    plan_id: PlanId,
    billing_mode: BillingMode,
    addon_ids: Vec<AddonId>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_ID)
    }
}

impl Selection {
    pub fn new(plan_id: impl Into<PlanId>) -> Self {
        Self {
            plan_id: plan_id.into(),
            billing_mode: BillingMode::default(),
            addon_ids: Vec::new(),
        }
    }

    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    pub fn billing_mode(&self) -> BillingMode {
        self.billing_mode
    }

    pub fn addon_ids(&self) -> &[AddonId] {
        &self.addon_ids
    }

    pub fn select_plan(&mut self, plan_id: impl Into<PlanId>) {
        self.plan_id = plan_id.into();
    }

    pub fn set_billing_mode(&mut self, mode: BillingMode) {
        self.billing_mode = mode;
    }

    pub fn toggle_billing_mode(&mut self) {
        self.billing_mode = self.billing_mode.toggled();
    }

    pub fn is_addon_selected(&self, addon_id: &str) -> bool {
        self.addon_ids.iter().any(|id| id.as_str() == addon_id)
    }

    /// Add the add-on if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle_addon(&mut self, addon_id: impl Into<AddonId>) -> bool {
        let addon_id = addon_id.into();
        if let Some(pos) = self.addon_ids.iter().position(|id| *id == addon_id) {
            self.addon_ids.remove(pos);
            false
        } else {
            self.addon_ids.push(addon_id);
            true
        }
    }

    pub fn total(&self, catalog: &Catalog) -> Price {
        calculate_total(catalog, self.plan_id.as_str(), self.billing_mode, &self.addon_ids)
    }

    pub fn quote(&self, catalog: &Catalog) -> Option<Quote> {
        quote(catalog, self.plan_id.as_str(), self.billing_mode, &self.addon_ids)
    }

    /// Encode for a shareable checkout link.
    pub fn to_params(&self) -> SelectionParams {
        let addons = self
            .addon_ids
            .iter()
            .map(AddonId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        SelectionParams {
            plan: Some(self.plan_id.to_string()),
            billing: Some(self.billing_mode.to_string()),
            addons: Some(addons),
        }
    }

    /// Decode shareable parameters.
    ///
    /// - `plan` is required
    /// - missing or blank `billing` means monthly, an unrecognised value is rejected
    /// - `addons` is comma-separated; blanks are dropped, repeats collapsed
    ///
    /// Ids are not checked against the catalog.
    pub fn from_params(params: &SelectionParams) -> DomainResult<Self> {
        let plan_id: PlanId = params
            .plan
            .as_deref()
            .ok_or_else(|| DomainError::validation("plan is required"))?
            .parse()
            .map_err(|_| DomainError::validation("plan is required"))?;

        let billing_mode = match params.billing.as_deref().map(str::trim) {
            None | Some("") => BillingMode::default(),
            Some(raw) => raw.parse()?,
        };

        let mut selection = Self {
            plan_id,
            billing_mode,
            addon_ids: Vec::new(),
        };
        for id in params
            .addons
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            if !selection.is_addon_selected(id) {
                selection.addon_ids.push(AddonId::new(id));
            }
        }
        Ok(selection)
    }
}

/// The `plan` / `billing` / `addons` triple carried from the selector to
/// checkout (query string parameters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<String>,
}

impl SelectionParams {
    /// `plan=pro&billing=yearly&addons=extra-storage%2Cwhite-label`
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(plan) = &self.plan {
            out.append_pair("plan", plan);
        }
        if let Some(billing) = &self.billing {
            out.append_pair("billing", billing);
        }
        if let Some(addons) = &self.addons {
            out.append_pair("addons", addons);
        }
        out.finish()
    }

    /// Parse a query string; unrelated keys are ignored, the last occurrence wins.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "plan" => params.plan = Some(value.into_owned()),
                "billing" => params.billing = Some(value.into_owned()),
                "addons" => params.addons = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}
