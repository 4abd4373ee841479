//! In-memory SQLite store for project compute and storage usage.
//!
//! Daily compute and weekly storage records are loaded from CSV, rolled up
//! by calendar month with SQL, and turned into dashboard charts.
//!
//! ```rust
//! use rcd_usage::{Database, UsageFilter};
//!
//! let db = Database::new().unwrap();
//! db.load_compute(
//!     "date,project,number_jobs,cpu_time,wait_time,wall_time\n2023-01-04,scw1000,2,7200,60,7200\n",
//! )
//! .unwrap();
//! let charts = db.usage_charts(&UsageFilter::default()).unwrap();
//! assert_eq!(charts.len(), 6);
//! ```

pub mod charts;
mod loader;
pub mod models;
mod queries;
pub mod rollup;
pub mod schema;
pub mod summary;

pub use models::{
    ComputeDaily, MonthlyCompute, MonthlyStorage, StorageWeekly, UsageFilter, UsageTotals,
};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory usage database. Clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_compute(
            "date,project,number_jobs,cpu_time,wait_time,wall_time\n2023-01-04,scw1000,2,7200,60,7200\n",
        )
        .unwrap();
        assert_eq!(db2.count("compute_daily").unwrap(), 1, "clones share the connection");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.count("compute_daily").unwrap(), 0);
        assert_eq!(db.count("storage_weekly").unwrap(), 0);
    }
}
