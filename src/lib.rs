//! partcost: parts costing for bill-of-materials estimation
//!
//! Every catalog part maps a quantity (and, for rails, an optional length)
//! to an estimated purchase cost and an optional vendor link. All functions
//! are pure.

pub mod catalog;
pub mod core;
pub mod entities;

pub use crate::core::{fastener_default_cost, BatchPricing, PricingError, PricingRule, Quantity};
pub use crate::entities::{estimate_bom, BomEstimate, BomLine, CostEstimate, Part, PartCategory};
