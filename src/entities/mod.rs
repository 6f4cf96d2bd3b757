//! Entity type definitions
//!
//! - [`Part`] - Catalog parts with their pricing records
//! - [`BomLine`] - A part and quantity within a bill of materials

pub mod bom;
pub mod part;

pub use bom::{estimate_bom, BomEstimate, BomLine, LineEstimate};
pub use part::{CostEstimate, Part, PartCategory, PartSpec};
