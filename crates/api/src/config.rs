//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `PLANPICK_BIND_ADDR` | `0.0.0.0:8080` |
//! | `PLANPICK_PAYMENT_DELAY_MS` | `2000` |
//! | `PLANPICK_CATALOG_PATH` | unset (built-in catalog) |
//! | `PLANPICK_DEFAULT_PLAN` | unset (`pro`, or the catalog's first plan) |

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

use planpick_catalog::Catalog;
use planpick_checkout::PaymentSimulator;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub payment_delay: Duration,
    pub catalog_path: Option<PathBuf>,
    /// Explicit default plan; `None` lets the catalog decide.
    pub default_plan: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            payment_delay: PaymentSimulator::DEFAULT_DELAY,
            catalog_path: None,
            default_plan: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("PLANPICK_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "invalid PLANPICK_BIND_ADDR; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let payment_delay = match lookup("PLANPICK_PAYMENT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .unwrap_or_else(|e| {
                    tracing::warn!(value = %raw, error = %e, "invalid PLANPICK_PAYMENT_DELAY_MS; using default");
                    defaults.payment_delay
                }),
            None => defaults.payment_delay,
        };

        let catalog_path = lookup("PLANPICK_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let default_plan = lookup("PLANPICK_DEFAULT_PLAN")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self {
            bind_addr,
            payment_delay,
            catalog_path,
            default_plan,
        }
    }

    /// The configured catalog file, or the built-in catalog.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::standard());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("invalid catalog {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            plans = catalog.list_plans().len(),
            addons = catalog.list_addons().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.payment_delay, Duration::from_millis(2000));
        assert_eq!(cfg.default_plan, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("PLANPICK_BIND_ADDR", "127.0.0.1:9000"),
            ("PLANPICK_PAYMENT_DELAY_MS", "0"),
            ("PLANPICK_CATALOG_PATH", "/etc/planpick/catalog.json"),
            ("PLANPICK_DEFAULT_PLAN", "team"),
        ]));
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.payment_delay, Duration::ZERO);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/etc/planpick/catalog.json")));
        assert_eq!(cfg.default_plan.as_deref(), Some("team"));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("PLANPICK_BIND_ADDR", "not-an-addr"),
            ("PLANPICK_PAYMENT_DELAY_MS", "-5"),
            ("PLANPICK_CATALOG_PATH", "  "),
            ("PLANPICK_DEFAULT_PLAN", ""),
        ]));
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn built_in_catalog_without_path() {
        let catalog = ApiConfig::default().load_catalog().unwrap();
        assert!(catalog.find_plan("pro").is_some());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let cfg = ApiConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/planpick-catalog.json")),
            ..ApiConfig::default()
        };
        let err = cfg.load_catalog().unwrap_err();
        assert!(err.to_string().contains("failed to read catalog"));
    }
}
