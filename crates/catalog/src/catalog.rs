//! The static catalog of plans and add-ons.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use planpick_core::{DomainError, DomainResult, Entity, Price};

use crate::item::{Addon, Plan, PlanFeature};

/// Immutable, ordered set of plans and add-ons.
///
/// Built once at process start. The ordered vectors keep display order; the
/// index maps give O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    plans: Vec<Plan>,
    addons: Vec<Addon>,
    plan_index: HashMap<String, usize>,
    addon_index: HashMap<String, usize>,
}

/// On-disk catalog document (`{"plans": [...], "addons": [...]}`).
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    plans: Vec<Plan>,
    #[serde(default)]
    addons: Vec<Addon>,
}

impl Catalog {
    /// Build a catalog, enforcing: at least one plan, non-empty and unique ids.
    pub fn new(plans: Vec<Plan>, addons: Vec<Addon>) -> DomainResult<Self> {
        if plans.is_empty() {
            return Err(DomainError::validation("catalog must contain at least one plan"));
        }

        let plan_index = index_by_id(plans.iter().map(|p| p.id().as_str()), "plan")?;
        let addon_index = index_by_id(addons.iter().map(|a| a.id().as_str()), "add-on")?;

        let popular = plans.iter().filter(|p| p.is_popular()).count();
        if popular > 1 {
            tracing::warn!(popular, "more than one plan is marked popular");
        }

        Ok(Self {
            plans,
            addons,
            plan_index,
            addon_index,
        })
    }

    /// Parse a JSON catalog document and validate it like [`Catalog::new`].
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog document: {e}")))?;
        Self::new(doc.plans, doc.addons)
    }

    /// The built-in product catalog.
    pub fn standard() -> Self {
        Self {
            plan_index: positions(STANDARD_PLAN_IDS),
            addon_index: positions(STANDARD_ADDON_IDS),
            plans: standard_plans(),
            addons: standard_addons(),
        }
    }

    /// Plans in display order. Never empty.
    pub fn list_plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Add-ons in display order. May be empty.
    pub fn list_addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn find_plan(&self, id: &str) -> Option<&Plan> {
        self.plan_index.get(id).map(|&i| &self.plans[i])
    }

    pub fn find_addon(&self, id: &str) -> Option<&Addon> {
        self.addon_index.get(id).map(|&i| &self.addons[i])
    }

    pub fn contains_plan(&self, id: &str) -> bool {
        self.plan_index.contains_key(id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn index_by_id<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
) -> DomainResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    let mut seen = HashSet::new();
    for (pos, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(DomainError::validation(format!("{kind} id cannot be empty")));
        }
        if !seen.insert(id) {
            return Err(DomainError::validation(format!("duplicate {kind} id: {id}")));
        }
        index.insert(id.to_string(), pos);
    }
    Ok(index)
}

fn positions(ids: &[&str]) -> HashMap<String, usize> {
    ids.iter()
        .enumerate()
        .map(|(pos, id)| (id.to_string(), pos))
        .collect()
}

const STANDARD_PLAN_IDS: &[&str] = &["starter", "pro", "team"];
const STANDARD_ADDON_IDS: &[&str] = &["extra-storage", "premium-support", "white-label"];

// Yearly prices are ten months' worth ("2 months free").
fn standard_plans() -> Vec<Plan> {
    vec![
        Plan::new(
            "starter",
            "Starter",
            "Perfect for individuals and small projects",
            Price::from_major(9),
            Price::from_major(90),
        )
        .with_features([
            PlanFeature::included("Up to 5 projects"),
            PlanFeature::included("10 GB storage"),
            PlanFeature::included("Basic analytics"),
            PlanFeature::included("Email support"),
            PlanFeature::excluded("Priority support"),
            PlanFeature::excluded("Advanced analytics"),
            PlanFeature::excluded("Custom integrations"),
        ]),
        Plan::new(
            "pro",
            "Pro",
            "For professionals and growing teams",
            Price::from_major(29),
            Price::from_major(290),
        )
        .marked_popular()
        .with_features([
            PlanFeature::included("Unlimited projects"),
            PlanFeature::included("100 GB storage"),
            PlanFeature::included("Advanced analytics"),
            PlanFeature::included("Priority support"),
            PlanFeature::included("API access"),
            PlanFeature::excluded("Custom integrations"),
            PlanFeature::excluded("Dedicated account manager"),
        ]),
        Plan::new(
            "team",
            "Team",
            "For large teams and enterprises",
            Price::from_major(99),
            Price::from_major(990),
        )
        .with_features([
            PlanFeature::included("Unlimited projects"),
            PlanFeature::included("1 TB storage"),
            PlanFeature::included("Advanced analytics"),
            PlanFeature::included("Priority support"),
            PlanFeature::included("API access"),
            PlanFeature::included("Custom integrations"),
            PlanFeature::included("Dedicated account manager"),
        ]),
    ]
}

fn standard_addons() -> Vec<Addon> {
    vec![
        Addon::new(
            "extra-storage",
            "Extra Storage",
            "Add 500 GB of additional storage",
            Price::from_major(10),
            Price::from_major(100),
        ),
        Addon::new(
            "premium-support",
            "Premium Support",
            "24/7 support with 1-hour response time",
            Price::from_major(15),
            Price::from_major(150),
        ),
        Addon::new(
            "white-label",
            "White Label",
            "Remove branding and use your own",
            Price::from_major(25),
            Price::from_major(250),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BillingMode;

    #[test]
    fn standard_catalog_lists_plans_in_display_order() {
        let catalog = Catalog::standard();
        let ids: Vec<_> = catalog.list_plans().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["starter", "pro", "team"]);

        let ids: Vec<_> = catalog.list_addons().iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, vec!["extra-storage", "premium-support", "white-label"]);
    }

    #[test]
    fn standard_index_matches_data() {
        let catalog = Catalog::standard();
        for plan in catalog.list_plans() {
            assert_eq!(catalog.find_plan(plan.id().as_str()), Some(plan));
        }
        for addon in catalog.list_addons() {
            assert_eq!(catalog.find_addon(addon.id().as_str()), Some(addon));
        }
    }

    #[test]
    fn standard_catalog_has_a_single_popular_plan() {
        let catalog = Catalog::standard();
        let popular: Vec<_> = catalog
            .list_plans()
            .iter()
            .filter(|p| p.is_popular())
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(popular, vec!["pro"]);
    }

    #[test]
    fn standard_prices() {
        let catalog = Catalog::standard();
        let pro = catalog.find_plan("pro").unwrap();
        assert_eq!(pro.price_for(BillingMode::Monthly), Price::from_major(29));
        assert_eq!(pro.price_for(BillingMode::Yearly), Price::from_major(290));

        let storage = catalog.find_addon("extra-storage").unwrap();
        assert_eq!(storage.price_for(BillingMode::Yearly), Price::from_major(100));
        assert_eq!(catalog.find_plan("team").unwrap().features().len(), 7);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let catalog = Catalog::standard();
        assert!(catalog.find_plan("enterprise").is_none());
        assert!(catalog.find_addon("").is_none());
        assert!(!catalog.contains_plan("PRO"));
    }

    #[test]
    fn new_rejects_empty_plan_list() {
        let err = Catalog::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let plan = Plan::new("a", "A", "", Price::ZERO, Price::ZERO);
        let err = Catalog::new(vec![plan.clone(), plan], vec![]).unwrap_err();
        assert_eq!(err, DomainError::validation("duplicate plan id: a"));

        let addon = Addon::new("x", "X", "", Price::ZERO, Price::ZERO);
        let plan = Plan::new("a", "A", "", Price::ZERO, Price::ZERO);
        assert!(Catalog::new(vec![plan], vec![addon.clone(), addon]).is_err());
    }

    #[test]
    fn new_accepts_empty_addon_list() {
        let plan = Plan::new("solo", "Solo", "", Price::from_major(5), Price::from_major(50));
        let catalog = Catalog::new(vec![plan], vec![]).unwrap();
        assert!(catalog.list_addons().is_empty());
        assert!(catalog.contains_plan("solo"));
    }

    #[test]
    fn from_json_builds_a_validated_catalog() {
        let json = r#"{
            "plans": [
                {"id": "basic", "name": "Basic", "description": "", "monthly_price": 500, "yearly_price": 4800, "popular": true}
            ],
            "addons": [
                {"id": "sso", "name": "SSO", "description": "", "monthly_price": 200, "yearly_price": 2000}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.find_plan("basic").unwrap().yearly_price(), Price::from_cents(4800));
        assert!(catalog.find_addon("sso").is_some());
    }

    #[test]
    fn from_json_reports_malformed_documents() {
        assert!(matches!(
            Catalog::from_json("{\"plans\": 3}"),
            Err(DomainError::Validation(_))
        ));
        assert!(Catalog::from_json(r#"{"plans": []}"#).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every listed entry is found by its id, in listing position.
            #[test]
            fn index_agrees_with_listing_order(
                plan_ids in proptest::collection::hash_set("[a-z]{1,8}", 1..12),
                addon_ids in proptest::collection::hash_set("[a-z]{1,8}-x", 0..12),
            ) {
                let plans: Vec<_> = plan_ids
                    .iter()
                    .map(|id| Plan::new(id.as_str(), id.as_str(), "", Price::from_cents(100), Price::from_cents(1000)))
                    .collect();
                let addons: Vec<_> = addon_ids
                    .iter()
                    .map(|id| Addon::new(id.as_str(), id.as_str(), "", Price::from_cents(10), Price::from_cents(100)))
                    .collect();
                let catalog = Catalog::new(plans, addons).unwrap();

                for plan in catalog.list_plans() {
                    prop_assert_eq!(catalog.find_plan(plan.id().as_str()), Some(plan));
                }
                for addon in catalog.list_addons() {
                    prop_assert_eq!(catalog.find_addon(addon.id().as_str()), Some(addon));
                }
                prop_assert!(catalog.find_plan("NOT-A-SLUG").is_none());
            }
        }
    }
}
