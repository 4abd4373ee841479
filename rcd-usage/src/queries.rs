//! Aggregation queries over the usage tables.
//!
//! Monthly queries bucket records by calendar month with
//! `GROUP BY substr(date, 1, 7)` and return months in ascending order.
//! Bounds of the filter are inclusive; a `None` bound or project matches
//! everything.

use crate::models::{MonthlyCompute, MonthlyStorage, UsageFilter, UsageTotals};
use crate::Database;
use rcd_utils::dates::parse_date;
use rusqlite::{params, Row};

fn filter_params(filter: &UsageFilter) -> (Option<String>, Option<String>, Option<String>) {
    (
        filter.start.map(|d| d.to_string()),
        filter.end.map(|d| d.to_string()),
        filter.project.clone(),
    )
}

/// `YYYY-MM` to the first day of that month.
fn month_from_row(row: &Row<'_>) -> rusqlite::Result<chrono::NaiveDate> {
    let month: String = row.get(0)?;
    parse_date(&format!("{}-01", month)).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            e.into(),
        )
    })
}

fn non_negative(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let v: i64 = row.get(idx)?;
    Ok(v.max(0) as u64)
}

impl Database {
    /// Compute totals per month.
    pub fn monthly_compute(&self, filter: &UsageFilter) -> anyhow::Result<Vec<MonthlyCompute>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT substr(date, 1, 7) AS month,
                    SUM(number_jobs), SUM(cpu_time), SUM(wait_time), SUM(wall_time)
             FROM compute_daily
             WHERE (?1 IS NULL OR date >= ?1)
               AND (?2 IS NULL OR date <= ?2)
               AND (?3 IS NULL OR project = ?3)
             GROUP BY month
             ORDER BY month",
        )?;
        let (start, end, project) = filter_params(filter);
        let rows = stmt
            .query_map(params![start, end, project], |row| {
                Ok(MonthlyCompute {
                    month: month_from_row(row)?,
                    number_jobs: non_negative(row, 1)?,
                    cpu_seconds: non_negative(row, 2)?,
                    wait_seconds: non_negative(row, 3)?,
                    wall_seconds: non_negative(row, 4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: monthly_compute returned {} months", rows.len());
        Ok(rows)
    }

    /// Storage sums per month.
    pub fn monthly_storage(&self, filter: &UsageFilter) -> anyhow::Result<Vec<MonthlyStorage>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT substr(date, 1, 7) AS month,
                    SUM(home_space_used), SUM(home_files_used),
                    SUM(scratch_space_used), SUM(scratch_files_used)
             FROM storage_weekly
             WHERE (?1 IS NULL OR date >= ?1)
               AND (?2 IS NULL OR date <= ?2)
               AND (?3 IS NULL OR project = ?3)
             GROUP BY month
             ORDER BY month",
        )?;
        let (start, end, project) = filter_params(filter);
        let rows = stmt
            .query_map(params![start, end, project], |row| {
                Ok(MonthlyStorage {
                    month: month_from_row(row)?,
                    home_space_used: non_negative(row, 1)?,
                    home_files_used: non_negative(row, 2)?,
                    scratch_space_used: non_negative(row, 3)?,
                    scratch_files_used: non_negative(row, 4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: monthly_storage returned {} months", rows.len());
        Ok(rows)
    }

    /// Totals over every selected record; storage figures are averages.
    pub fn usage_totals(&self, filter: &UsageFilter) -> anyhow::Result<UsageTotals> {
        let conn = self.conn.borrow();
        let (start, end, project) = filter_params(filter);
        let (number_jobs, cpu_seconds, wait_seconds, wall_seconds) = conn.query_row(
            "SELECT COALESCE(SUM(number_jobs), 0), COALESCE(SUM(cpu_time), 0),
                    COALESCE(SUM(wait_time), 0), COALESCE(SUM(wall_time), 0)
             FROM compute_daily
             WHERE (?1 IS NULL OR date >= ?1)
               AND (?2 IS NULL OR date <= ?2)
               AND (?3 IS NULL OR project = ?3)",
            params![start, end, project],
            |row| {
                Ok((
                    non_negative(row, 0)?,
                    non_negative(row, 1)?,
                    non_negative(row, 2)?,
                    non_negative(row, 3)?,
                ))
            },
        )?;
        let (home_space_avg, scratch_space_avg, home_files_avg, scratch_files_avg) = conn.query_row(
            "SELECT AVG(home_space_used), AVG(scratch_space_used),
                    AVG(home_files_used), AVG(scratch_files_used)
             FROM storage_weekly
             WHERE (?1 IS NULL OR date >= ?1)
               AND (?2 IS NULL OR date <= ?2)
               AND (?3 IS NULL OR project = ?3)",
            params![start, end, project],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;
        Ok(UsageTotals {
            number_jobs,
            cpu_seconds,
            wait_seconds,
            wall_seconds,
            home_space_avg,
            scratch_space_avg,
            home_files_avg,
            scratch_files_avg,
        })
    }

    /// Number of rows in one of the usage tables.
    pub fn count(&self, table: &str) -> anyhow::Result<usize> {
        anyhow::ensure!(
            matches!(table, "compute_daily" | "storage_weekly"),
            "unknown table '{}'",
            table
        );
        let conn = self.conn.borrow();
        let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(n as usize)
    }
}
