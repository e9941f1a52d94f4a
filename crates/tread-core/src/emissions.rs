//! Static emission factor tables.
//!
//! Factors convert an annualised activity quantity (km, kWh, meals) into
//! kilograms of CO2. Every supported country defines all four categories;
//! the `[f64; 4]` row representation makes a partial row unrepresentable.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Categories ──────────────────────────────────────────────────────────────

/// Emission category, in factor-table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Transportation,
  Electricity,
  Diet,
  Waste,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Transportation,
    Category::Electricity,
    Category::Diet,
    Category::Waste,
  ];

  fn column(self) -> usize {
    match self {
      Category::Transportation => 0,
      Category::Electricity => 1,
      Category::Diet => 2,
      Category::Waste => 3,
    }
  }
}

// ─── Tables ──────────────────────────────────────────────────────────────────

/// kg CO2 per unit, one column per [`Category`]:
/// per km, per kWh, per meal, per kg of waste.
const EMISSION_FACTORS: &[(&str, [f64; 4])] = &[
  ("India", [0.12, 0.9, 0.45, 1.2]),
  ("US",    [0.4, 0.5, 0.7, 0.8]),
  ("UK",    [0.3, 0.4, 0.5, 1.0]),
];

/// Additional kg CO2 emitted per meal, by cooking method.
/// "Raw" is the zero-emission baseline.
const COOKING_FACTORS: &[(&str, f64)] = &[
  ("Boiling",  0.05),
  ("Grilling", 0.15),
  ("Frying",   0.2),
  ("Baking",   0.1),
  ("Raw",      0.0),
];

// ─── Lookups ─────────────────────────────────────────────────────────────────

/// The emission factor for `country` and `category`.
pub fn factor(country: &str, category: Category) -> Result<f64> {
  EMISSION_FACTORS
    .iter()
    .find(|(name, _)| *name == country)
    .map(|(_, row)| row[category.column()])
    .ok_or_else(|| Error::UnknownCountry(country.to_owned()))
}

/// The additive per-meal factor for `method`.
pub fn cooking_factor(method: &str) -> Result<f64> {
  COOKING_FACTORS
    .iter()
    .find(|(name, _)| *name == method)
    .map(|&(_, f)| f)
    .ok_or_else(|| Error::UnknownCookingMethod(method.to_owned()))
}

/// Names of all supported countries, in table order.
pub fn countries() -> Vec<&'static str> {
  EMISSION_FACTORS.iter().map(|&(name, _)| name).collect()
}

/// Names of all supported cooking methods, in table order.
pub fn cooking_methods() -> Vec<&'static str> {
  COOKING_FACTORS.iter().map(|&(name, _)| name).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
