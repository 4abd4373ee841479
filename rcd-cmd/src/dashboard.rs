//! Render, validate and export dashboards.

use anyhow::Context;
use log::{info, warn};
use rcd_chart::{Dashboard, RenderReport};
use std::fs;
use std::io::{self, Write};

/// Read a dashboard file, or the analytics dashboard when no path is given.
pub fn load_dashboard(path: Option<&str>) -> anyhow::Result<Dashboard> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading dashboard {}", path))?;
            Dashboard::from_json(&json).with_context(|| format!("parsing dashboard {}", path))
        }
        None => Dashboard::analytics_preset().context("parsing the analytics dashboard"),
    }
}

fn report_failures(report: &RenderReport) {
    for failure in &report.failures {
        warn!("{}: {}", failure.target_id, failure.error);
    }
}

pub fn run_render(dashboard: Option<&str>, output: &str, strict: bool) -> anyhow::Result<()> {
    let dashboard = load_dashboard(dashboard)?;
    let (html, report) = dashboard.to_html();
    report_failures(&report);
    if strict && !report.is_clean() {
        anyhow::bail!("{} charts failed to render", report.failures.len());
    }
    fs::write(output, html).with_context(|| format!("writing {}", output))?;
    info!(
        "Rendered {} charts ({} failed). Output: {}",
        report.rendered.len(),
        report.failures.len(),
        output
    );
    Ok(())
}

pub fn run_validate(dashboard: Option<&str>) -> anyhow::Result<()> {
    let dashboard = load_dashboard(dashboard)?;
    let (_, report) = dashboard.render();
    report_failures(&report);
    if !report.is_clean() {
        anyhow::bail!(
            "{} of {} charts are invalid",
            report.failures.len(),
            dashboard.charts.len()
        );
    }
    info!("All {} charts are valid", report.rendered.len());
    Ok(())
}

pub fn run_export_csv(
    dashboard: Option<&str>,
    chart: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let dashboard = load_dashboard(dashboard)?;
    let spec = dashboard
        .chart(chart)
        .with_context(|| format!("no chart '{}' in dashboard '{}'", chart, dashboard.title))?;
    rcd_chart::validate::validate(spec)?;
    let csv = rcd_chart::export::to_csv(spec)?;
    write_output(output, &csv)?;
    info!("Exported chart '{}'", chart);
    Ok(())
}

pub fn run_preset(output: Option<&str>) -> anyhow::Result<()> {
    let dashboard = Dashboard::analytics_preset()?;
    write_output(output, &dashboard.to_json()?)
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(output: Option<&str>, contents: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, contents).with_context(|| format!("writing {}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
