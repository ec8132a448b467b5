use std::collections::HashSet;

use planpick_catalog::{BillingMode, Catalog, Plan};
use planpick_core::Price;

/// Total price of a plan plus add-ons for one billing period.
///
/// - unknown `plan_id` → `Price::ZERO`
/// - unknown add-on ids contribute nothing
/// - duplicate add-on ids are charged once
pub fn calculate_total<I, S>(
    catalog: &Catalog,
    plan_id: &str,
    mode: BillingMode,
    addon_ids: I,
) -> Price
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(plan) = catalog.find_plan(plan_id) else {
        tracing::debug!(plan_id, "pricing unknown plan as zero");
        return Price::ZERO;
    };

    let mut seen = HashSet::new();
    let addons: Price = addon_ids
        .into_iter()
        .filter_map(|id| {
            let id = id.as_ref();
            if !seen.insert(id.to_string()) {
                return None;
            }
            let addon = catalog.find_addon(id);
            if addon.is_none() {
                tracing::debug!(addon_id = id, "skipping unknown add-on");
            }
            addon
        })
        .map(|addon| addon.price_for(mode))
        .sum();

    plan.price_for(mode) + addons
}

/// Yearly savings versus paying monthly for twelve months.
///
/// Only shown in yearly mode, and only when positive.
pub fn yearly_savings(plan: &Plan, mode: BillingMode) -> Option<Price> {
    if mode != BillingMode::Yearly {
        return None;
    }
    plan.monthly_price()
        .times(12)
        .checked_sub(plan.yearly_price())
        .filter(|savings| !savings.is_zero())
}
