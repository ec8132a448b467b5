//! Billing cadence.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use planpick_core::{DomainError, ValueObject};

/// Recurrence cadence; selects which price field of a plan/add-on applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingMode {
    #[default]
    Monthly,
    Yearly,
}

impl BillingMode {
    pub const ALL: [BillingMode; 2] = [BillingMode::Monthly, BillingMode::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingMode::Monthly => "monthly",
            BillingMode::Yearly => "yearly",
        }
    }

    /// The other cadence.
    pub fn toggled(self) -> Self {
        match self {
            BillingMode::Monthly => BillingMode::Yearly,
            BillingMode::Yearly => BillingMode::Monthly,
        }
    }

    /// Price suffix: `/mo` or `/yr`.
    pub fn unit_short(&self) -> &'static str {
        match self {
            BillingMode::Monthly => "mo",
            BillingMode::Yearly => "yr",
        }
    }

    /// "per month" / "per year".
    pub fn period(&self) -> &'static str {
        match self {
            BillingMode::Monthly => "month",
            BillingMode::Yearly => "year",
        }
    }

    /// "Billed monthly" / "Billed annually".
    pub fn adverb(&self) -> &'static str {
        match self {
            BillingMode::Monthly => "monthly",
            BillingMode::Yearly => "annually",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingMode::Monthly => "Monthly",
            BillingMode::Yearly => "Yearly",
        }
    }
}

impl ValueObject for BillingMode {}

impl core::fmt::Display for BillingMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BillingMode::Monthly),
            "yearly" => Ok(BillingMode::Yearly),
            other => Err(DomainError::validation(format!(
                "billing mode must be one of: monthly, yearly (got {other:?})"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_monthly() {
        assert_eq!(BillingMode::default(), BillingMode::Monthly);
    }

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("monthly".parse::<BillingMode>().unwrap(), BillingMode::Monthly);
        assert_eq!(" Yearly ".parse::<BillingMode>().unwrap(), BillingMode::Yearly);
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = "weekly".parse::<BillingMode>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!("".parse::<BillingMode>().is_err());
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in BillingMode::ALL {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&BillingMode::Yearly).unwrap(), "\"yearly\"");
        let mode: BillingMode = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(mode, BillingMode::Monthly);
    }
}
