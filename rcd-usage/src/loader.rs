//! CSV loading for the usage tables.
//!
//! Both formats carry a header row and are deserialized with serde into
//! [`ComputeDaily`] and [`StorageWeekly`] before insertion.
//!
//! ```text
//! date,project,number_jobs,cpu_time,wait_time,wall_time
//! 2023-01-04,scw1000,12,86400,3600,90000
//! ```

use crate::models::{ComputeDaily, StorageWeekly};
use crate::Database;
use anyhow::Context;
use rusqlite::params;

impl Database {
    /// Load daily compute records from headered CSV. Returns the row count.
    pub fn load_compute(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());
        let records = rdr
            .deserialize()
            .enumerate()
            .map(|(i, r)| r.with_context(|| format!("compute record {}", i + 1)))
            .collect::<anyhow::Result<Vec<ComputeDaily>>>()?;
        self.insert_compute(&records)
    }

    /// Load weekly storage records from headered CSV. Returns the row count.
    pub fn load_storage(&self, csv_data: &str) -> anyhow::Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());
        let records = rdr
            .deserialize()
            .enumerate()
            .map(|(i, r)| r.with_context(|| format!("storage record {}", i + 1)))
            .collect::<anyhow::Result<Vec<StorageWeekly>>>()?;
        self.insert_storage(&records)
    }

    /// Insert compute records in one transaction; none are kept if any fails.
    pub fn insert_compute(&self, records: &[ComputeDaily]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO compute_daily (date, project, number_jobs, cpu_time, wait_time, wall_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (i, r) in records.iter().enumerate() {
                let what = || format!("compute record {}", i + 1);
                stmt.execute(params![
                    r.date.to_string(),
                    r.project,
                    sql_int(r.number_jobs, "number_jobs").with_context(what)?,
                    sql_int(r.cpu_time, "cpu_time").with_context(what)?,
                    sql_int(r.wait_time, "wait_time").with_context(what)?,
                    sql_int(r.wall_time, "wall_time").with_context(what)?,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("loader: loaded {} compute records", records.len());
        Ok(records.len())
    }

    /// Insert storage records in one transaction; none are kept if any fails.
    pub fn insert_storage(&self, records: &[StorageWeekly]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO storage_weekly
                     (date, project, home_space_used, home_files_used, scratch_space_used, scratch_files_used)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (i, r) in records.iter().enumerate() {
                let what = || format!("storage record {}", i + 1);
                stmt.execute(params![
                    r.date.to_string(),
                    r.project,
                    sql_int(r.home_space_used, "home_space_used").with_context(what)?,
                    sql_int(r.home_files_used, "home_files_used").with_context(what)?,
                    sql_int(r.scratch_space_used, "scratch_space_used").with_context(what)?,
                    sql_int(r.scratch_files_used, "scratch_files_used").with_context(what)?,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("loader: loaded {} storage records", records.len());
        Ok(records.len())
    }
}

/// SQLite integers are signed 64-bit.
fn sql_int(value: u64, column: &str) -> anyhow::Result<i64> {
    i64::try_from(value).with_context(|| format!("{} value {} is too large to store", column, value))
}
