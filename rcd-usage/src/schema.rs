//! SQL schema for the in-memory usage database.
//!
//! Dates are stored as `YYYY-MM-DD` text so that `substr(date, 1, 7)` gives
//! the calendar month and plain string comparison gives date order. Compute
//! times are whole seconds.

/// Returns the full SQL schema as a single batch string.
///
/// - `compute_daily` - per-day job counts and CPU/wait/wall seconds
/// - `storage_weekly` - weekly home/scratch space and file counts
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS compute_daily (
        date TEXT NOT NULL,
        project TEXT,
        number_jobs INTEGER NOT NULL,
        cpu_time INTEGER NOT NULL,
        wait_time INTEGER NOT NULL,
        wall_time INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_compute_date ON compute_daily(date);
    CREATE INDEX IF NOT EXISTS idx_compute_project ON compute_daily(project);

    CREATE TABLE IF NOT EXISTS storage_weekly (
        date TEXT NOT NULL,
        project TEXT,
        home_space_used INTEGER NOT NULL,
        home_files_used INTEGER NOT NULL,
        scratch_space_used INTEGER NOT NULL,
        scratch_files_used INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_storage_date ON storage_weekly(date);
    CREATE INDEX IF NOT EXISTS idx_storage_project ON storage_weekly(project);
    "#
}
