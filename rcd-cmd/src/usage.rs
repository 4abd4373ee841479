//! Usage charts from compute and storage CSV exports.

use crate::dashboard::write_output;
use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use rcd_forms::date_picker::DatePicker;
use rcd_usage::{Database, UsageFilter};
use std::fs;

pub struct UsageArgs {
    pub compute: String,
    pub storage: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub project: Option<String>,
    pub output: String,
    pub json: bool,
}

fn parse_bound(field: &str, value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    value
        .map(|v| DatePicker::new(field).parse(v))
        .transpose()
        .with_context(|| format!("--{}", field))
}

pub fn build_filter(args: &UsageArgs) -> anyhow::Result<UsageFilter> {
    let start = parse_bound("start", args.start.as_deref())?;
    let end = parse_bound("end", args.end.as_deref())?;
    if let (Some(s), Some(e)) = (start, end) {
        anyhow::ensure!(s <= e, "start date {} is after end date {}", s, e);
    }
    Ok(UsageFilter {
        start,
        end,
        project: args.project.clone(),
    })
}

pub fn run_usage(args: &UsageArgs) -> anyhow::Result<()> {
    let filter = build_filter(args)?;
    let db = Database::new()?;

    let compute = fs::read_to_string(&args.compute)
        .with_context(|| format!("reading {}", args.compute))?;
    db.load_compute(&compute)?;
    if let Some(storage_path) = &args.storage {
        let storage = fs::read_to_string(storage_path)
            .with_context(|| format!("reading {}", storage_path))?;
        db.load_storage(&storage)?;
    }

    let title = match &args.project {
        Some(project) => format!("{} usage", project),
        None => "Usage".to_string(),
    };
    let dashboard = db.usage_dashboard(&title, &filter)?;

    let contents = if args.json {
        dashboard.to_json()?
    } else {
        let (html, report) = dashboard.to_html();
        for failure in &report.failures {
            log::warn!("{}: {}", failure.target_id, failure.error);
        }
        html
    };
    write_output(Some(&args.output), &contents)?;
    info!("Wrote {} usage charts to {}", dashboard.charts.len(), args.output);

    let totals = db.usage_totals(&filter)?;
    write_output(None, &totals.to_string())
}
