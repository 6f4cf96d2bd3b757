//! Core module - quantities, pricing rules and errors

pub mod error;
pub mod pricing;
pub mod quantity;

pub use error::PricingError;
pub use pricing::{fastener_default_cost, BatchPricing, PricingRule, FASTENER_DEFAULT};
pub use quantity::Quantity;
