//! Pricing errors
//!
//! Every failure in this crate is an invalid argument: there are no side
//! effects to roll back, so callers only need to fix their input.

use miette::Diagnostic;
use thiserror::Error;

/// Invalid input to a costing function
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum PricingError {
    /// Quantity below zero
    #[error("Invalid quantity: {value}. Quantity cannot be negative")]
    #[diagnostic(
        code(partcost::quantity::negative),
        help("Use a whole number of units, 0 or more")
    )]
    InvalidQuantity { value: i64 },

    /// Quantity with a fractional part, NaN or infinity
    #[error("Invalid quantity: {value}. Quantity must be a whole number")]
    #[diagnostic(
        code(partcost::quantity::fractional),
        help("Parts are counted in whole units")
    )]
    FractionalQuantity { value: f64 },

    /// Quantity outside the supported range
    #[error("Invalid quantity: {value}. Maximum is {}", u32::MAX)]
    #[diagnostic(code(partcost::quantity::too_large))]
    QuantityTooLarge { value: i64 },

    /// Quantity string that is not a number
    #[error("Invalid quantity: '{input}' is not a number")]
    #[diagnostic(code(partcost::quantity::parse))]
    ParseQuantity { input: String },

    /// Part identifier not in the catalog
    #[error("Unknown part: {name}")]
    #[diagnostic(
        code(partcost::part::unknown),
        help("Known parts: rail_mgn9, screw_m5_wafer_screw, screw_m3_cap_screw, nut_m5_nut, sliding_t_nut_m3_hammer_nut, washer_m3_washer")
    )]
    UnknownPart { name: String },
}

impl PricingError {
    /// Whether the error came from a bad quantity (as opposed to a bad part name)
    pub fn is_quantity_error(&self) -> bool {
        !matches!(self, PricingError::UnknownPart { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PricingError::InvalidQuantity { value: -3 };
        assert_eq!(
            err.to_string(),
            "Invalid quantity: -3. Quantity cannot be negative"
        );

        let err = PricingError::UnknownPart {
            name: "bolt".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown part: bolt");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = PricingError::FractionalQuantity { value: 1.5 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("partcost::quantity::fractional"));
    }

    #[test]
    fn test_is_quantity_error() {
        assert!(PricingError::QuantityTooLarge { value: i64::MAX }.is_quantity_error());
        assert!(!PricingError::UnknownPart {
            name: "x".to_string()
        }
        .is_quantity_error());
    }
}
