//! AQI classification — the six-bucket threshold ladder and the
//! single-sample category distribution behind the chart.

use serde::{Deserialize, Serialize};

// ─── Categories ──────────────────────────────────────────────────────────────

/// Air-quality severity, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
  Good,
  Moderate,
  #[serde(rename = "Unhealthy for Sensitive Groups")]
  UnhealthyForSensitiveGroups,
  Unhealthy,
  #[serde(rename = "Very Unhealthy")]
  VeryUnhealthy,
  Hazardous,
}

impl AqiCategory {
  /// All categories in severity order; indexes match [`distribution`]
  /// slots.
  pub const ALL: [AqiCategory; 6] = [
    AqiCategory::Good,
    AqiCategory::Moderate,
    AqiCategory::UnhealthyForSensitiveGroups,
    AqiCategory::Unhealthy,
    AqiCategory::VeryUnhealthy,
    AqiCategory::Hazardous,
  ];

  /// Human-readable label, matching the serialised form.
  pub fn label(self) -> &'static str {
    match self {
      AqiCategory::Good => "Good",
      AqiCategory::Moderate => "Moderate",
      AqiCategory::UnhealthyForSensitiveGroups => {
        "Unhealthy for Sensitive Groups"
      }
      AqiCategory::Unhealthy => "Unhealthy",
      AqiCategory::VeryUnhealthy => "Very Unhealthy",
      AqiCategory::Hazardous => "Hazardous",
    }
  }

  /// Slot index in the six-slot distribution.
  pub fn index(self) -> usize {
    match self {
      AqiCategory::Good => 0,
      AqiCategory::Moderate => 1,
      AqiCategory::UnhealthyForSensitiveGroups => 2,
      AqiCategory::Unhealthy => 3,
      AqiCategory::VeryUnhealthy => 4,
      AqiCategory::Hazardous => 5,
    }
  }
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Classify a PM2.5-derived AQI value.
///
/// The ladder is total: anything at or below 50 is `Good`, which means a
/// negative or otherwise nonsensical reading also lands there. This
/// function classifies whatever the provider reported; it does not
/// validate.
pub fn categorize(value: f64) -> AqiCategory {
  if value <= 50.0 {
    AqiCategory::Good
  } else if value <= 100.0 {
    AqiCategory::Moderate
  } else if value <= 150.0 {
    AqiCategory::UnhealthyForSensitiveGroups
  } else if value <= 200.0 {
    AqiCategory::Unhealthy
  } else if value <= 300.0 {
    AqiCategory::VeryUnhealthy
  } else {
    AqiCategory::Hazardous
  }
}

// ─── Reading ─────────────────────────────────────────────────────────────────

/// A classified reading for one city. Never persisted; built per fetch
/// and discarded after display.
#[derive(Debug, Clone, Serialize)]
pub struct AqiReading {
  pub city:       String,
  pub pm25_value: f64,
  pub category:   AqiCategory,
}

impl AqiReading {
  pub fn new(city: impl Into<String>, pm25_value: f64) -> Self {
    Self {
      city: city.into(),
      pm25_value,
      category: categorize(pm25_value),
    }
  }
}

// ─── Distribution ────────────────────────────────────────────────────────────

/// The chart's six-slot category distribution for a single reading:
/// exactly one slot is 1, the rest stay 0. A degenerate histogram, kept
/// as-is so the rendered chart matches the documented behaviour.
pub fn distribution(category: AqiCategory) -> [u32; 6] {
  let mut slots = [0u32; 6];
  slots[category.index()] = 1;
  slots
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn boundaries_are_exact() {
    assert_eq!(categorize(50.0), AqiCategory::Good);
    assert_eq!(categorize(51.0), AqiCategory::Moderate);
    assert_eq!(categorize(100.0), AqiCategory::Moderate);
    assert_eq!(categorize(101.0), AqiCategory::UnhealthyForSensitiveGroups);
    assert_eq!(categorize(150.0), AqiCategory::UnhealthyForSensitiveGroups);
    assert_eq!(categorize(151.0), AqiCategory::Unhealthy);
    assert_eq!(categorize(200.0), AqiCategory::Unhealthy);
    assert_eq!(categorize(300.0), AqiCategory::VeryUnhealthy);
    assert_eq!(categorize(301.0), AqiCategory::Hazardous);
  }

  #[test]
  fn fractional_values_between_buckets_classify() {
    assert_eq!(categorize(50.5), AqiCategory::Moderate);
    assert_eq!(categorize(150.5), AqiCategory::Unhealthy);
  }

  #[test]
  fn negative_values_fall_into_good() {
    assert_eq!(categorize(-12.0), AqiCategory::Good);
  }

  #[test]
  fn distribution_sets_exactly_one_slot() {
    for category in AqiCategory::ALL {
      let slots = distribution(category);
      assert_eq!(slots.iter().sum::<u32>(), 1);
      assert_eq!(slots[category.index()], 1);
    }
  }

  #[test]
  fn labels_match_serialised_form() {
    for category in AqiCategory::ALL {
      let json = serde_json::to_string(&category).unwrap();
      assert_eq!(json, format!("{:?}", category.label()));
    }
  }

  #[test]
  fn reading_is_classified_on_construction() {
    let reading = AqiReading::new("Delhi", 180.0);
    assert_eq!(reading.category, AqiCategory::Unhealthy);
    assert_eq!(reading.city, "Delhi");
  }
}
