//! Pie slice percentages for tooltips and legends.

use crate::chart_spec::Point;
use rcd_utils::units::round_to;
use serde::Serialize;

/// A slice's share of its pie, computed for display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieShare {
    pub label: String,
    /// The stored value, untouched.
    pub value: f64,
    /// `value / sum * 100`, rounded to one decimal place.
    pub percentage: f64,
    pub selected: bool,
    pub sliced: bool,
}

impl PieShare {
    /// Label as shown in the tooltip, e.g. "55.6%".
    pub fn display(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Compute the displayed share of every slice.
///
/// A pie whose values sum to zero shows 0.0% for every slice.
pub fn shares(points: &[Point]) -> Vec<PieShare> {
    let total: f64 = points.iter().map(|p| p.value).sum();
    points
        .iter()
        .map(|p| {
            let percentage = if total > 0.0 {
                round_to(p.value / total * 100.0, 1)
            } else {
                0.0
            };
            PieShare {
                label: p.label.clone(),
                value: p.value,
                percentage,
                selected: p.selected,
                sliced: p.sliced,
            }
        })
        .collect()
}
