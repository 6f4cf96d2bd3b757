//! Pricing rules
//!
//! Two rules cover the catalog: a flat price per unit, and batch pricing
//! where every started batch is charged in full.

use serde::{Deserialize, Serialize};

use super::error::PricingError;
use super::quantity::Quantity;

/// Batch pricing - a fixed price per started batch of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPricing {
    /// Units per batch (never zero)
    pub batch_size: u32,

    /// Price of one batch in currency units
    pub batch_price: u64,
}

/// Default fastener pricing: about $2 for a bag of 10
pub const FASTENER_DEFAULT: BatchPricing = BatchPricing {
    batch_size: 10,
    batch_price: 2,
};

impl BatchPricing {
    /// Number of batches needed to cover the quantity
    pub fn batches(&self, quantity: Quantity) -> u64 {
        u64::from(quantity.get()).div_ceil(u64::from(self.batch_size.max(1)))
    }

    /// Cost of the quantity, rounding up to whole batches
    pub fn price(&self, quantity: Quantity) -> u64 {
        self.batch_price.saturating_mul(self.batches(quantity))
    }
}

/// How a part's cost scales with quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    /// Same price for every unit
    PerUnit { unit_price: u64 },

    /// Priced by started batch
    Batch(BatchPricing),
}

impl PricingRule {
    pub fn price(&self, quantity: Quantity) -> u64 {
        match self {
            PricingRule::PerUnit { unit_price } => {
                unit_price.saturating_mul(u64::from(quantity.get()))
            }
            PricingRule::Batch(batch) => batch.price(quantity),
        }
    }
}

/// The default fastener rule applied to a raw quantity
///
/// Negative quantities are rejected rather than priced.
pub fn fastener_default_cost(quantity: i64) -> Result<u64, PricingError> {
    let quantity = Quantity::try_from(quantity)?;
    Ok(FASTENER_DEFAULT.price(quantity))
}
