//! Footprint estimation — period inputs to annual tonnes of CO2.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  emissions::{self, Category},
};

// ─── Input ───────────────────────────────────────────────────────────────────

/// Raw period inputs as collected from the user.
///
/// Range coercion (non-negative sliders, integer meal counts) is the
/// presentation layer's job; the calculator only rejects unknown country
/// and cooking-method names.
#[derive(Debug, Clone, Deserialize)]
pub struct FootprintInput {
  pub country:         String,
  /// Daily commute distance in km.
  pub commute_km:      f64,
  /// Monthly electricity consumption in kWh.
  pub electricity_kwh: f64,
  /// Meals per day.
  pub meals_per_day:   u32,
  pub cooking_method:  String,
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// Per-category annual emissions in tonnes of CO2, each rounded to two
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintBreakdown {
  pub transportation: f64,
  pub electricity:    f64,
  pub diet:           f64,
  pub cooking:        f64,
  pub total:          f64,
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

// ─── Estimation ──────────────────────────────────────────────────────────────

/// Estimate annual emissions from period inputs.
///
/// Inputs are annualised (×365 for daily values, ×12 for monthly),
/// multiplied by the country's factors, converted from kg to tonnes, and
/// rounded per category. `total` is the rounded sum of the four
/// already-rounded category values — summing before rounding gives subtly
/// different totals, and downstream consumers depend on this order.
pub fn estimate(input: &FootprintInput) -> Result<FootprintBreakdown> {
  let annual_km    = input.commute_km * 365.0;
  let annual_kwh   = input.electricity_kwh * 12.0;
  let annual_meals = f64::from(input.meals_per_day) * 365.0;

  let transportation = round2(
    emissions::factor(&input.country, Category::Transportation)? * annual_km
      / 1000.0,
  );
  let electricity = round2(
    emissions::factor(&input.country, Category::Electricity)? * annual_kwh
      / 1000.0,
  );
  let diet = round2(
    emissions::factor(&input.country, Category::Diet)? * annual_meals / 1000.0,
  );
  let cooking = round2(
    emissions::cooking_factor(&input.cooking_method)? * annual_meals / 1000.0,
  );

  let total = round2(transportation + electricity + diet + cooking);

  Ok(FootprintBreakdown {
    transportation,
    electricity,
    diet,
    cooking,
    total,
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
