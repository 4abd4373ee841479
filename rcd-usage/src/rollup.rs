//! Monthly roll-ups in the shape the dashboard charts plot.
//!
//! Hours are whole hours (`floor(seconds / 3600)`). Compute months are
//! labelled `Mon YYYY`; storage months keep their `YYYY-MM-DD` first day so
//! they export as dates.

use crate::models::{MonthlyCompute, MonthlyStorage};
use rcd_utils::dates::{format_date, month_label};
use rcd_utils::units::{round_to, seconds_to_hours};
use serde::Serialize;

/// CPU, wait and wall hours per month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HoursByMonth {
    pub labels: Vec<String>,
    pub cpu: Vec<f64>,
    pub wait: Vec<f64>,
    pub wall: Vec<f64>,
}

/// Home and scratch sums per month, plus their total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorageByMonth {
    pub labels: Vec<String>,
    pub home: Vec<f64>,
    pub scratch: Vec<f64>,
    pub total: Vec<f64>,
}

/// One value per month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyValues {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

fn hours(seconds: u64) -> f64 {
    seconds_to_hours(seconds as f64)
}

pub fn rate_of_usage(rows: &[MonthlyCompute]) -> HoursByMonth {
    let mut out = HoursByMonth::default();
    for row in rows {
        out.labels.push(month_label(&row.month));
        out.cpu.push(hours(row.cpu_seconds));
        out.wait.push(hours(row.wait_seconds));
        out.wall.push(hours(row.wall_seconds));
    }
    out
}

/// Running totals of [`rate_of_usage`].
pub fn cumulative_usage(rows: &[MonthlyCompute]) -> HoursByMonth {
    let rate = rate_of_usage(rows);
    HoursByMonth {
        labels: rate.labels,
        cpu: running_total(&rate.cpu),
        wait: running_total(&rate.wait),
        wall: running_total(&rate.wall),
    }
}

fn running_total(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// CPU hours over wall hours as a percentage, rounded to two places.
///
/// A month with no wall hours has an efficiency of 0.
pub fn efficiency(rows: &[MonthlyCompute]) -> MonthlyValues {
    let mut out = MonthlyValues::default();
    for row in rows {
        let cpu = hours(row.cpu_seconds);
        let wall = hours(row.wall_seconds);
        out.labels.push(month_label(&row.month));
        out.values.push(if wall > 0.0 {
            round_to(cpu / wall * 100.0, 2)
        } else {
            0.0
        });
    }
    out
}

pub fn jobs_per_month(rows: &[MonthlyCompute]) -> MonthlyValues {
    MonthlyValues {
        labels: rows.iter().map(|r| month_label(&r.month)).collect(),
        values: rows.iter().map(|r| r.number_jobs as f64).collect(),
    }
}

pub fn disk_space(rows: &[MonthlyStorage]) -> StorageByMonth {
    storage_by_month(rows, |r| (r.home_space_used, r.scratch_space_used))
}

pub fn file_count(rows: &[MonthlyStorage]) -> StorageByMonth {
    storage_by_month(rows, |r| (r.home_files_used, r.scratch_files_used))
}

fn storage_by_month<F>(rows: &[MonthlyStorage], pick: F) -> StorageByMonth
where
    F: Fn(&MonthlyStorage) -> (u64, u64),
{
    let mut out = StorageByMonth::default();
    for row in rows {
        let (home, scratch) = pick(row);
        out.labels.push(format_date(&row.month));
        out.home.push(home as f64);
        out.scratch.push(scratch as f64);
        out.total.push((home + scratch) as f64);
    }
    out
}
