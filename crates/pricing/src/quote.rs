//! Order-summary breakdown of a selection.

use std::collections::HashSet;

use serde::Serialize;

use planpick_catalog::{Addon, BillingMode, Catalog, Plan};
use planpick_core::{Entity, Price};

use crate::engine::{calculate_total, yearly_savings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Plan,
    Addon,
}

/// One priced row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub kind: LineKind,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl QuoteLine {
    fn for_plan(plan: &Plan, mode: BillingMode) -> Self {
        Self {
            kind: LineKind::Plan,
            id: plan.id().to_string(),
            name: plan.name().to_string(),
            description: plan.description().to_string(),
            price: plan.price_for(mode),
        }
    }

    fn for_addon(addon: &Addon, mode: BillingMode) -> Self {
        Self {
            kind: LineKind::Addon,
            id: addon.id().to_string(),
            name: addon.name().to_string(),
            description: addon.description().to_string(),
            price: addon.price_for(mode),
        }
    }
}

/// Priced selection: plan line, add-on lines (catalog display order) and total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub billing_mode: BillingMode,
    pub plan: QuoteLine,
    pub addons: Vec<QuoteLine>,
    pub savings: Option<Price>,
    pub total: Price,
}

impl Quote {
    pub fn lines(&self) -> impl Iterator<Item = &QuoteLine> {
        core::iter::once(&self.plan).chain(self.addons.iter())
    }
}

/// Build the order summary for a selection.
///
/// Returns `None` when the plan is unknown; there is nothing to summarise.
/// Add-ons follow catalog order regardless of selection order, and unknown or
/// repeated ids are ignored exactly as in [`calculate_total`].
pub fn quote<I, S>(catalog: &Catalog, plan_id: &str, mode: BillingMode, addon_ids: I) -> Option<Quote>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let plan = catalog.find_plan(plan_id)?;
    let wanted: HashSet<String> = addon_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    let addons: Vec<QuoteLine> = catalog
        .list_addons()
        .iter()
        .filter(|addon| wanted.contains(addon.id().as_str()))
        .map(|addon| QuoteLine::for_addon(addon, mode))
        .collect();

    let quote = Quote {
        billing_mode: mode,
        plan: QuoteLine::for_plan(plan, mode),
        addons,
        savings: yearly_savings(plan, mode),
        total: calculate_total(catalog, plan_id, mode, &wanted),
    };
    debug_assert_eq!(quote.total, quote.lines().map(|l| l.price).sum::<Price>());
    Some(quote)
}
