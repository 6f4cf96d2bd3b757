//! Validated part quantities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// A whole, non-negative count of units
///
/// The only ways in are the fallible conversions, so a `Quantity` in hand
/// has already been checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Build from an unsigned count, which is always valid
    pub const fn new(count: u32) -> Self {
        Quantity(count)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = PricingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(PricingError::InvalidQuantity { value });
        }
        u32::try_from(value)
            .map(Quantity)
            .map_err(|_| PricingError::QuantityTooLarge { value })
    }
}

impl TryFrom<f64> for Quantity {
    type Error = PricingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(PricingError::FractionalQuantity { value });
        }
        if value < 0.0 {
            return Err(PricingError::InvalidQuantity {
                value: value as i64,
            });
        }
        if value > u32::MAX as f64 {
            return Err(PricingError::QuantityTooLarge {
                value: value as i64,
            });
        }
        Ok(Quantity(value as u32))
    }
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Quantity(count)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

impl FromStr for Quantity {
    type Err = PricingError;

    /// Accepts integers ("12") and whole-valued decimals ("12.0")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Quantity::try_from(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Quantity::try_from(value),
            Err(_) => Err(PricingError::ParseQuantity {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
