//! Monetary amounts.

use core::iter::Sum;
use core::ops::{Add, AddAssign};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Non-negative price in the smallest currency unit (e.g. cents).
///
/// The catalog is single-currency, so no currency code is carried.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (e.g. dollars).
    pub const fn from_major(units: u64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a count of billing periods.
    pub fn times(self, periods: u64) -> Self {
        Self(self.0.saturating_mul(periods))
    }

    /// `self - rhs`, or `None` when the result would be negative.
    pub fn checked_sub(self, rhs: Price) -> Option<Price> {
        self.0.checked_sub(rhs.0).map(Price)
    }
}

impl ValueObject for Price {}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Price {
    /// `$29` for whole amounts, `$29.50` otherwise.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        if cents == 0 {
            write!(f, "${units}")
        } else {
            write!(f, "${units}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_zero_cents() {
        assert_eq!(Price::from_major(29).to_string(), "$29");
        assert_eq!(Price::from_cents(2950).to_string(), "$29.50");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn checked_sub_refuses_negative_results() {
        let a = Price::from_major(90);
        let b = Price::from_major(108);
        assert_eq!(b.checked_sub(a), Some(Price::from_major(18)));
        assert_eq!(a.checked_sub(b), None);
    }

    #[test]
    fn sums_and_multiplies() {
        let total: Price = [Price::from_major(10), Price::from_major(15)].iter().sum();
        assert_eq!(total, Price::from_major(25));
        assert_eq!(Price::from_major(9).times(12), Price::from_major(108));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: addition is commutative for any pair of amounts.
            #[test]
            fn addition_commutes(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
                let (a, b) = (Price::from_cents(a), Price::from_cents(b));
                prop_assert_eq!(a + b, b + a);
            }
        }
    }
}
