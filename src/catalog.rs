//! Named costing functions, one per catalog part
//!
//! Each takes a raw quantity and an optional length and returns the
//! estimate for that part. They are thin wrappers over [`Part::cost`].

use crate::core::error::PricingError;
use crate::entities::part::{CostEstimate, Part};

pub fn rail_mgn9(quantity: i64, length: Option<f64>) -> Result<CostEstimate, PricingError> {
    Part::RailMgn9.cost(quantity, length)
}

pub fn screw_m5_wafer_screw(
    quantity: i64,
    length: Option<f64>,
) -> Result<CostEstimate, PricingError> {
    Part::ScrewM5WaferScrew.cost(quantity, length)
}

pub fn screw_m3_cap_screw(
    quantity: i64,
    length: Option<f64>,
) -> Result<CostEstimate, PricingError> {
    Part::ScrewM3CapScrew.cost(quantity, length)
}

pub fn nut_m5_nut(quantity: i64) -> Result<CostEstimate, PricingError> {
    Part::NutM5Nut.cost(quantity, None)
}

pub fn sliding_t_nut_m3_hammer_nut(quantity: i64) -> Result<CostEstimate, PricingError> {
    Part::SlidingTNutM3HammerNut.cost(quantity, None)
}

pub fn washer_m3_washer(quantity: i64) -> Result<CostEstimate, PricingError> {
    Part::WasherM3Washer.cost(quantity, None)
}

/// Look up a part by name and price it
pub fn cost_by_name(
    part: &str,
    quantity: i64,
    length: Option<f64>,
) -> Result<CostEstimate, PricingError> {
    part.parse::<Part>()?.cost(quantity, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_functions_match_parts() {
        assert_eq!(rail_mgn9(3, Some(120.0)).unwrap().cost, 60);
        assert_eq!(screw_m5_wafer_screw(5, None).unwrap().cost, 2);
        assert_eq!(screw_m3_cap_screw(11, None).unwrap().cost, 4);
        assert_eq!(nut_m5_nut(20).unwrap().cost, 4);
        assert_eq!(sliding_t_nut_m3_hammer_nut(21).unwrap().cost, 6);
        assert_eq!(washer_m3_washer(1).unwrap().cost, 2);
    }

    #[test]
    fn test_cost_by_name() {
        let est = cost_by_name("washer_m3_washer", 30, None).unwrap();
        assert_eq!(est.cost, 6);
        assert!(cost_by_name("rivet", 1, None).is_err());
        assert!(cost_by_name("rail_mgn9", -2, Some(100.0)).is_err());
    }
}
