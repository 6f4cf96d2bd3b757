//! Part entity type - catalog parts with their pricing rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PricingError;
use crate::core::pricing::{PricingRule, FASTENER_DEFAULT};
use crate::core::quantity::Quantity;

/// Vendor listing for the M5 wafer screws
pub const M5_WAFER_SCREW_URL: &str = "https://www.aliexpress.com/item/1005005070119421.html?spm=a2g0o.order_list.order_list_main.102.463c1802BoQpbq";

/// Part category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Rail,
    Fastener,
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartCategory::Rail => write!(f, "rail"),
            PartCategory::Fastener => write!(f, "fastener"),
        }
    }
}

/// Catalog part identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// MGN9 linear rail
    #[serde(rename = "rail_mgn9")]
    RailMgn9,
    /// M5 wafer head screw
    #[serde(rename = "screw_m5_wafer_screw")]
    ScrewM5WaferScrew,
    /// M3 socket cap screw
    #[serde(rename = "screw_m3_cap_screw")]
    ScrewM3CapScrew,
    /// M5 hex nut
    #[serde(rename = "nut_m5_nut")]
    NutM5Nut,
    /// M3 sliding T-nut (hammer nut)
    #[serde(rename = "sliding_t_nut_m3_hammer_nut")]
    SlidingTNutM3HammerNut,
    /// M3 washer
    #[serde(rename = "washer_m3_washer")]
    WasherM3Washer,
}

/// Pricing record for a catalog part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartSpec {
    pub rule: PricingRule,

    /// Vendor link returned with every estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<&'static str>,

    pub category: PartCategory,

    /// Whether the part is sized by length (length is accepted but not priced yet)
    pub length_dependent: bool,
}

/// Estimated cost of a part at some quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Cost in currency units
    pub cost: u64,

    /// Vendor link, if the part has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Part {
    /// Get the string identifier of the part
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::RailMgn9 => "rail_mgn9",
            Part::ScrewM5WaferScrew => "screw_m5_wafer_screw",
            Part::ScrewM3CapScrew => "screw_m3_cap_screw",
            Part::NutM5Nut => "nut_m5_nut",
            Part::SlidingTNutM3HammerNut => "sliding_t_nut_m3_hammer_nut",
            Part::WasherM3Washer => "washer_m3_washer",
        }
    }

    /// Get all catalog parts
    pub fn all() -> &'static [Part] {
        &[
            Part::RailMgn9,
            Part::ScrewM5WaferScrew,
            Part::ScrewM3CapScrew,
            Part::NutM5Nut,
            Part::SlidingTNutM3HammerNut,
            Part::WasherM3Washer,
        ]
    }

    /// Get the pricing record for this part
    pub fn spec(&self) -> PartSpec {
        let fastener = |reference| PartSpec {
            rule: PricingRule::Batch(FASTENER_DEFAULT),
            reference,
            category: PartCategory::Fastener,
            length_dependent: false,
        };

        match self {
            Part::RailMgn9 => PartSpec {
                rule: PricingRule::PerUnit { unit_price: 20 },
                reference: None,
                category: PartCategory::Rail,
                length_dependent: true,
            },
            Part::ScrewM5WaferScrew => fastener(Some(M5_WAFER_SCREW_URL)),
            Part::ScrewM3CapScrew
            | Part::NutM5Nut
            | Part::SlidingTNutM3HammerNut
            | Part::WasherM3Washer => fastener(None),
        }
    }

    pub fn category(&self) -> PartCategory {
        self.spec().category
    }

    /// Estimate the cost of an already validated quantity
    ///
    /// `length` is carried for length-dependent parts but does not affect
    /// the price.
    pub fn estimate(&self, quantity: Quantity, length: Option<f64>) -> CostEstimate {
        let spec = self.spec();
        let cost = spec.rule.price(quantity);

        tracing::debug!(
            part = self.as_str(),
            quantity = quantity.get(),
            length,
            cost,
            "priced part"
        );

        CostEstimate {
            cost,
            reference: spec.reference.map(str::to_string),
        }
    }

    /// Estimate the cost of a raw quantity, rejecting negative values
    pub fn cost(&self, quantity: i64, length: Option<f64>) -> Result<CostEstimate, PricingError> {
        let quantity = Quantity::try_from(quantity)?;
        Ok(self.estimate(quantity, length))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Part {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Part::all()
            .iter()
            .copied()
            .find(|part| part.as_str() == normalized)
            .ok_or_else(|| PricingError::UnknownPart {
                name: s.to_string(),
            })
    }
}
