//! Chart definitions built from usage roll-ups.
//!
//! Ids, titles and bands match the analytics dashboard so a generated
//! chart can stand in for the bundled sample data.

use crate::models::UsageFilter;
use crate::rollup::{self, HoursByMonth, MonthlyValues, StorageByMonth};
use crate::Database;
use rcd_chart::{Band, ChartKind, ChartSpec, Dashboard, Series};

pub const RATE_OF_USAGE_ID: &str = "rate_of_usage_chart_core";
pub const CUMULATIVE_USAGE_ID: &str = "cumulative_usage_chart_core";
pub const EFFICIENCY_ID: &str = "compute_efficiency_chart";
pub const JOBS_ID: &str = "num_slurm_jobs_chart";
pub const DISK_SPACE_ID: &str = "disk_space_storage_chart";
pub const FILE_COUNT_ID: &str = "file_count_storage_chart";

/// Poor, Fair, Good and Excellent regions of the efficiency chart.
pub fn efficiency_bands() -> Vec<Band> {
    vec![
        Band::new(0.0, 40.0, "Poor"),
        Band::new(40.0, 50.0, "Fair"),
        Band::new(50.0, 75.0, "Good"),
        Band::new(75.0, 100.0, "Excellent"),
    ]
}

fn hours_chart(id: &str, title: &str, hours: HoursByMonth) -> ChartSpec {
    ChartSpec::new(id, ChartKind::Line, title)
        .with_axes(hours.labels)
        .with_y_axis("Hours", None)
        .with_series(Series::values("CPU Time", hours.cpu))
        .with_series(Series::values("Wait Time", hours.wait))
        .with_series(Series::values("Wall Time", hours.wall))
        .with_csv_export()
}

pub fn rate_of_usage_chart(hours: HoursByMonth) -> ChartSpec {
    hours_chart(RATE_OF_USAGE_ID, "Rate Of Usage", hours)
}

pub fn cumulative_usage_chart(hours: HoursByMonth) -> ChartSpec {
    hours_chart(CUMULATIVE_USAGE_ID, "Cumulative Usage", hours)
}

pub fn efficiency_chart(efficiency: MonthlyValues) -> ChartSpec {
    let mut spec = ChartSpec::new(EFFICIENCY_ID, ChartKind::Spline, "Efficiency")
        .with_axes(efficiency.labels)
        .with_y_axis("Efficiency", Some(100.0))
        .with_series(Series::values("Efficiency", efficiency.values))
        .with_csv_export();
    for band in efficiency_bands() {
        spec = spec.with_band(band);
    }
    spec
}

pub fn jobs_chart(jobs: MonthlyValues) -> ChartSpec {
    ChartSpec::new(JOBS_ID, ChartKind::Column, "Number of jobs per month")
        .with_axes(jobs.labels)
        .with_series(Series::values("Number of Jobs", jobs.values))
        .with_csv_export()
}

fn storage_chart(id: &str, title: &str, storage: StorageByMonth) -> ChartSpec {
    ChartSpec::new(id, ChartKind::Column, title)
        .with_axes(storage.labels)
        .with_series(Series::values("Home", storage.home))
        .with_series(Series::values("Scratch", storage.scratch))
        .with_csv_export()
}

pub fn disk_space_chart(storage: StorageByMonth) -> ChartSpec {
    storage_chart(DISK_SPACE_ID, "Disk Space", storage)
}

pub fn file_count_chart(storage: StorageByMonth) -> ChartSpec {
    storage_chart(FILE_COUNT_ID, "File Count", storage)
}

impl Database {
    /// Every usage chart for the records the filter selects.
    pub fn usage_charts(&self, filter: &UsageFilter) -> anyhow::Result<Vec<ChartSpec>> {
        let compute = self.monthly_compute(filter)?;
        let storage = self.monthly_storage(filter)?;
        Ok(vec![
            rate_of_usage_chart(rollup::rate_of_usage(&compute)),
            cumulative_usage_chart(rollup::cumulative_usage(&compute)),
            efficiency_chart(rollup::efficiency(&compute)),
            jobs_chart(rollup::jobs_per_month(&compute)),
            disk_space_chart(rollup::disk_space(&storage)),
            file_count_chart(rollup::file_count(&storage)),
        ])
    }

    /// A dashboard of [`usage_charts`](Self::usage_charts).
    pub fn usage_dashboard(&self, title: &str, filter: &UsageFilter) -> anyhow::Result<Dashboard> {
        Ok(Dashboard::new(title, self.usage_charts(filter)?))
    }
}
