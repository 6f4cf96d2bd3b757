//! Bill of materials cost rollup

use serde::{Deserialize, Serialize};

use crate::core::error::PricingError;
use crate::core::quantity::Quantity;
use crate::entities::part::{CostEstimate, Part};

/// One line of a bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    /// Catalog part
    pub part: Part,

    /// Units needed
    pub quantity: Quantity,

    /// Length in mm, for length-dependent parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl BomLine {
    pub fn new(part: Part, quantity: Quantity) -> Self {
        Self {
            part,
            quantity,
            length: None,
        }
    }

    /// Builder: set the length
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Parse a part name and raw quantity into a line
    pub fn parse(part: &str, quantity: i64) -> Result<Self, PricingError> {
        Ok(Self::new(part.parse()?, Quantity::try_from(quantity)?))
    }

    pub fn estimate(&self) -> CostEstimate {
        self.part.estimate(self.quantity, self.length)
    }
}

/// A priced BOM line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineEstimate {
    pub part: Part,
    pub quantity: Quantity,

    #[serde(flatten)]
    pub estimate: CostEstimate,
}

/// Priced bill of materials
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BomEstimate {
    pub lines: Vec<LineEstimate>,

    /// Sum of line costs
    pub total: u64,
}

impl BomEstimate {
    /// Distinct vendor links in line order
    pub fn references(&self) -> Vec<&str> {
        let mut refs: Vec<&str> = Vec::new();
        for line in &self.lines {
            if let Some(reference) = line.estimate.reference.as_deref() {
                if !refs.contains(&reference) {
                    refs.push(reference);
                }
            }
        }
        refs
    }
}

/// Price every line of a BOM
///
/// Lines are priced independently, so two lines of the same fastener each
/// round up to their own batch.
pub fn estimate_bom(lines: &[BomLine]) -> BomEstimate {
    let mut total: u64 = 0;
    let lines: Vec<LineEstimate> = lines
        .iter()
        .map(|line| {
            let estimate = line.estimate();
            total = total.saturating_add(estimate.cost);
            LineEstimate {
                part: line.part,
                quantity: line.quantity,
                estimate,
            }
        })
        .collect();

    tracing::debug!(lines = lines.len(), total, "priced bom");

    BomEstimate { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::part::M5_WAFER_SCREW_URL;

    fn sample_bom() -> Vec<BomLine> {
        vec![
            BomLine::new(Part::RailMgn9, Quantity::new(2)).with_length(300.0),
            BomLine::new(Part::ScrewM5WaferScrew, Quantity::new(14)),
            BomLine::new(Part::NutM5Nut, Quantity::new(14)),
            BomLine::new(Part::ScrewM5WaferScrew, Quantity::new(4)),
        ]
    }

    #[test]
    fn test_bom_total() {
        let est = estimate_bom(&sample_bom());
        assert_eq!(est.lines.len(), 4);
        // 2 rails at 20, then 4 + 4 + 2 for the fasteners
        assert_eq!(est.total, 50);
        assert_eq!(est.lines[0].estimate.cost, 40);
    }

    #[test]
    fn test_bom_lines_round_independently() {
        let lines = vec![
            BomLine::new(Part::WasherM3Washer, Quantity::new(5)),
            BomLine::new(Part::WasherM3Washer, Quantity::new(5)),
        ];
        assert_eq!(estimate_bom(&lines).total, 4);
    }

    #[test]
    fn test_bom_references_are_distinct() {
        let est = estimate_bom(&sample_bom());
        assert_eq!(est.references(), vec![M5_WAFER_SCREW_URL]);
    }

    #[test]
    fn test_empty_bom() {
        let est = estimate_bom(&[]);
        assert_eq!(est, BomEstimate::default());
        assert!(est.references().is_empty());
    }

    #[test]
    fn test_bom_line_parse() {
        let line = BomLine::parse("nut_m5_nut", 12).unwrap();
        assert_eq!(line.part, Part::NutM5Nut);
        assert_eq!(line.quantity.get(), 12);

        assert!(matches!(
            BomLine::parse("nut_m5_nut", -12),
            Err(PricingError::InvalidQuantity { value: -12 })
        ));
        assert!(matches!(
            BomLine::parse("m8_nut", 1),
            Err(PricingError::UnknownPart { .. })
        ));
    }

    #[test]
    fn test_bom_from_yaml() {
        let yaml = r#"
- part: rail_mgn9
  quantity: 1
  length: 250.0
- part: sliding_t_nut_m3_hammer_nut
  quantity: 22
"#;
        let lines: Vec<BomLine> = serde_yml::from_str(yaml).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].length, Some(250.0));
        assert_eq!(estimate_bom(&lines).total, 26);
    }

    #[test]
    fn test_bom_yaml_rejects_negative_quantity() {
        let yaml = "- part: washer_m3_washer\n  quantity: -3\n";
        let result: Result<Vec<BomLine>, _> = serde_yml::from_str(yaml);
        assert!(result.is_err());
    }
}
