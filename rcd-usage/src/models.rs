//! Usage records as read from CSV, and the monthly rows queried back out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of compute usage for a project.
///
/// CSV header: `date,project,number_jobs,cpu_time,wait_time,wall_time`.
/// Times are in seconds. An empty `project` column is read as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeDaily {
    pub date: NaiveDate,
    #[serde(default)]
    pub project: Option<String>,
    pub number_jobs: u64,
    pub cpu_time: u64,
    pub wait_time: u64,
    pub wall_time: u64,
}

/// One weekly storage snapshot for a project.
///
/// CSV header:
/// `date,project,home_space_used,home_files_used,scratch_space_used,scratch_files_used`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageWeekly {
    pub date: NaiveDate,
    #[serde(default)]
    pub project: Option<String>,
    pub home_space_used: u64,
    pub home_files_used: u64,
    pub scratch_space_used: u64,
    pub scratch_files_used: u64,
}

/// Compute totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCompute {
    /// First day of the month.
    pub month: NaiveDate,
    pub number_jobs: u64,
    pub cpu_seconds: u64,
    pub wait_seconds: u64,
    pub wall_seconds: u64,
}

/// Storage sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStorage {
    /// First day of the month.
    pub month: NaiveDate,
    pub home_space_used: u64,
    pub home_files_used: u64,
    pub scratch_space_used: u64,
    pub scratch_files_used: u64,
}

/// Totals for a project or date range.
///
/// Storage figures are averages over the weekly snapshots (space in GB),
/// `None` when there are no snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageTotals {
    pub number_jobs: u64,
    pub cpu_seconds: u64,
    pub wait_seconds: u64,
    pub wall_seconds: u64,
    pub home_space_avg: Option<f64>,
    pub scratch_space_avg: Option<f64>,
    pub home_files_avg: Option<f64>,
    pub scratch_files_avg: Option<f64>,
}

/// Restricts which records a query sees. Both date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub project: Option<String>,
}

impl UsageFilter {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            project: None,
        }
    }

    pub fn for_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}
