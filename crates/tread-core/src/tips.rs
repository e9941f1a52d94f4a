//! Static advice shown alongside each footprint result.

/// `(section label, suggestions)` pairs in display order, one per
/// component of the result breakdown.
pub fn reduction_tips() -> &'static [(&'static str, &'static [&'static str])] {
  &[
    ("Transportation", &[
      "Use public transportation, carpool, or bike instead of driving alone.",
      "Switch to an electric vehicle (EV) or a hybrid vehicle.",
      "Walk for short trips to reduce your carbon footprint.",
      "Consider working remotely if possible to reduce the daily commute.",
    ]),
    ("Electricity", &[
      "Switch to energy-efficient appliances (LED bulbs, efficient ACs, etc.).",
      "Opt for renewable energy sources such as solar or wind energy.",
      "Unplug electronic devices when not in use to cut standby consumption.",
      "Install insulation to reduce heating and cooling energy needs.",
    ]),
    ("Diet", &[
      "Reduce meat and dairy consumption, which carry a higher footprint.",
      "Choose plant-based meals, which generally have lower emissions.",
      "Buy local and seasonal produce to cut transport and storage emissions.",
      "Minimise food waste by buying only what you need and storing it well.",
    ]),
    ("Cooking", &[
      "Use energy-efficient methods like pressure cooking or steaming.",
      "Reduce cooking time by batch cooking and right-sizing the pot or pan.",
      "Prefer a stove or induction cooktop over an oven where possible.",
      "Consider solar cookers or slow cookers as low-energy alternatives.",
    ]),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_section_per_breakdown_component() {
    let sections: Vec<_> =
      reduction_tips().iter().map(|&(label, _)| label).collect();
    assert_eq!(
      sections,
      ["Transportation", "Electricity", "Diet", "Cooking"]
    );
    assert!(reduction_tips().iter().all(|(_, tips)| !tips.is_empty()));
  }
}
