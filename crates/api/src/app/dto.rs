use serde::Deserialize;

use planpick_catalog::{Addon, BillingMode, Catalog, Plan};
use planpick_checkout::Receipt;
use planpick_core::{Entity, Price};
use planpick_pricing::{Quote, QuoteLine, Selection, yearly_savings};

// -------------------------
// Request DTOs
// -------------------------

/// `?billing=monthly|yearly` (missing means monthly).
#[derive(Debug, Default, Deserialize)]
pub struct BillingQuery {
    pub billing: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionLinkRequest {
    pub plan_id: String,
    #[serde(default)]
    pub billing_mode: BillingMode,
    #[serde(default)]
    pub addon_ids: Vec<String>,
}

impl SelectionLinkRequest {
    /// Replays the request as selector interactions (pick plan, set cadence,
    /// toggle each add-on on once).
    pub fn into_selection(self) -> Selection {
        let mut selection = Selection::new(self.plan_id);
        selection.set_billing_mode(self.billing_mode);
        for id in self.addon_ids {
            if !selection.is_addon_selected(&id) {
                selection.toggle_addon(id);
            }
        }
        selection
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FormatRequest {
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn price_to_json(price: Price) -> serde_json::Value {
    serde_json::json!({
        "cents": price.cents(),
        "display": price.to_string(),
    })
}

pub fn plan_to_json(plan: &Plan, mode: BillingMode) -> serde_json::Value {
    serde_json::json!({
        "id": plan.id().as_str(),
        "name": plan.name(),
        "description": plan.description(),
        "popular": plan.is_popular(),
        "monthly_price": plan.monthly_price().cents(),
        "yearly_price": plan.yearly_price().cents(),
        "price": price_to_json(plan.price_for(mode)),
        "unit": mode.unit_short(),
        "savings": yearly_savings(plan, mode).map(price_to_json),
        "features": plan.features().iter().map(|f| serde_json::json!({
            "text": f.text,
            "included": f.included,
        })).collect::<Vec<_>>(),
    })
}

pub fn addon_to_json(addon: &Addon, mode: BillingMode) -> serde_json::Value {
    serde_json::json!({
        "id": addon.id().as_str(),
        "name": addon.name(),
        "description": addon.description(),
        "monthly_price": addon.monthly_price().cents(),
        "yearly_price": addon.yearly_price().cents(),
        "price": price_to_json(addon.price_for(mode)),
        "unit": mode.unit_short(),
    })
}

fn quote_line_to_json(line: &QuoteLine) -> serde_json::Value {
    serde_json::json!({
        "id": line.id,
        "name": line.name,
        "description": line.description,
        "price": price_to_json(line.price),
    })
}

pub fn quote_to_json(quote: &Quote) -> serde_json::Value {
    let mode = quote.billing_mode;
    serde_json::json!({
        "billing_mode": mode,
        "billing_label": mode.label(),
        "billed": format!("Billed {}", mode.adverb()),
        "period": mode.period(),
        "plan": quote_line_to_json(&quote.plan),
        "addons": quote.addons.iter().map(quote_line_to_json).collect::<Vec<_>>(),
        "savings": quote.savings.map(price_to_json),
        "total": price_to_json(quote.total),
    })
}

pub fn selection_to_json(selection: &Selection, catalog: &Catalog) -> serde_json::Value {
    let params = selection.to_params();
    serde_json::json!({
        "plan_id": selection.plan_id().as_str(),
        "billing_mode": selection.billing_mode(),
        "addon_ids": selection.addon_ids(),
        "total": price_to_json(selection.total(catalog)),
        "params": params,
        "query": params.to_query_string(),
        "checkout_url": format!("/checkout?{}", params.to_query_string()),
    })
}

pub fn receipt_to_json(receipt: &Receipt) -> serde_json::Value {
    serde_json::json!({
        "status": "succeeded",
        "message": "Payment Successful! Your subscription has been activated.",
        "confirmation_id": receipt.confirmation_id.to_string(),
        "plan_id": receipt.plan_id.as_str(),
        "plan_name": receipt.plan_name,
        "billing_mode": receipt.billing_mode,
        "addon_ids": receipt.addon_ids,
        "total": price_to_json(receipt.total),
        "email": receipt.email,
        "card_last4": receipt.card_last4,
        "processed_at": receipt.processed_at.to_rfc3339(),
        "redirect": "/",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_json_shows_savings_only_when_yearly() {
        let catalog = Catalog::standard();
        let starter = catalog.find_plan("starter").unwrap();

        let yearly = plan_to_json(starter, BillingMode::Yearly);
        assert_eq!(yearly["price"]["display"], "$90");
        assert_eq!(yearly["unit"], "yr");
        assert_eq!(yearly["savings"]["cents"], 1800);

        let monthly = plan_to_json(starter, BillingMode::Monthly);
        assert!(monthly["savings"].is_null());
        assert_eq!(monthly["features"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn link_request_collapses_repeated_addons() {
        let req = SelectionLinkRequest {
            plan_id: "pro".into(),
            billing_mode: BillingMode::Monthly,
            addon_ids: vec!["white-label".into(), "white-label".into()],
        };
        let selection = req.into_selection();
        assert_eq!(selection.addon_ids().len(), 1);
    }
}
