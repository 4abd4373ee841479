//! Headline figures shown above the usage charts.

use crate::models::UsageTotals;
use rcd_utils::units::{format_duration, gb_to_tb, round_to};
use std::fmt;

impl UsageTotals {
    /// Overall CPU time over wall time as a percentage; 0 with no wall time.
    pub fn efficiency(&self) -> f64 {
        if self.wall_seconds == 0 {
            return 0.0;
        }
        round_to(self.cpu_seconds as f64 / self.wall_seconds as f64 * 100.0, 2)
    }

    /// Label and display value for each figure, in page order.
    pub fn figures(&self) -> Vec<(&'static str, String)> {
        let space = |gb: Option<f64>| gb.filter(|v| *v > 0.0).map(gb_to_tb).unwrap_or_default();
        let files = |n: Option<f64>| n.map(|v| format!("{:.0}", v)).unwrap_or_default();
        vec![
            ("Jobs", self.number_jobs.to_string()),
            ("CPU time", format_duration(self.cpu_seconds)),
            ("Wait time", format_duration(self.wait_seconds)),
            ("Core time", format_duration(self.wall_seconds)),
            ("Efficiency", format!("{:.2}%", self.efficiency())),
            ("Home space", space(self.home_space_avg)),
            ("Scratch space", space(self.scratch_space_avg)),
            ("Home files", files(self.home_files_avg)),
            ("Scratch files", files(self.scratch_files_avg)),
        ]
    }
}

impl fmt::Display for UsageTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.figures() {
            writeln!(f, "{:<14}{}", format!("{}:", label), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> UsageTotals {
        UsageTotals {
            number_jobs: 12,
            cpu_seconds: 90_060,
            wait_seconds: 0,
            wall_seconds: 180_120,
            home_space_avg: Some(2048.0),
            scratch_space_avg: None,
            home_files_avg: Some(1500.4),
            scratch_files_avg: None,
        }
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(totals().efficiency(), 50.0);
        assert_eq!(UsageTotals::default().efficiency(), 0.0);
    }

    #[test]
    fn test_figures() {
        let figures = totals().figures();
        let value = |label: &str| {
            figures
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(value("CPU time"), "1d 1h 1m");
        assert_eq!(value("Wait time"), "0");
        assert_eq!(value("Efficiency"), "50.00%");
        assert_eq!(value("Home space"), "2.000 TB");
        assert_eq!(value("Scratch space"), "");
        assert_eq!(value("Home files"), "1500");
    }

    #[test]
    fn test_display() {
        let text = totals().to_string();
        assert!(text.starts_with("Jobs:         12\n"));
        assert_eq!(text.lines().count(), 9);
    }
}
