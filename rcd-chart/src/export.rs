//! CSV export of a chart's top-level series.
//!
//! One row per category, one column per series. When every category reads
//! as a date the chart is treated as a time series and categories are
//! rewritten with the chart's export date format (`YYYY-MM-DD` by default).

use crate::chart_spec::{ChartKind, ChartSpec, SeriesData};
use crate::error::ExportError;
use rcd_utils::dates::{format_date_with, parse_category_date};
use std::io;

/// Serialize a chart's series to a CSV string.
pub fn to_csv(spec: &ChartSpec) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(spec, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Serialize a chart's series as CSV into any writer.
pub fn write_csv<W: io::Write>(spec: &ChartSpec, writer: W) -> Result<(), ExportError> {
    let categories = categories(spec);
    let labels = category_labels(spec, &categories)?;

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Category".to_string()];
    header.extend(spec.series.iter().enumerate().map(|(i, s)| match (&s.name, spec.kind) {
        (None, ChartKind::Pie) => "Share".to_string(),
        _ => s.display_name(i),
    }));
    wtr.write_record(&header)?;

    for (row, (category, label)) in categories.iter().zip(&labels).enumerate() {
        let mut record = vec![label.clone()];
        for series in &spec.series {
            let cell = match &series.data {
                SeriesData::Values(values) => values.get(row).copied(),
                SeriesData::Points(points) => points
                    .iter()
                    .find(|p| &p.label == category)
                    .map(|p| p.value),
            };
            record.push(cell.map(|v| v.to_string()).unwrap_or_default());
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    log::debug!(
        "exported {} rows for chart '{}'",
        categories.len(),
        spec.target_id
    );
    Ok(())
}

/// Row keys: the category axis, or point labels in order of first appearance.
fn categories(spec: &ChartSpec) -> Vec<String> {
    if let Some(axes) = &spec.axes {
        return axes.clone();
    }
    let mut seen: Vec<String> = Vec::new();
    for series in &spec.series {
        if let SeriesData::Points(points) = &series.data {
            for point in points {
                if !seen.contains(&point.label) {
                    seen.push(point.label.clone());
                }
            }
        }
    }
    seen
}

/// Row labels as written; dates are reformatted only when every category is one.
fn category_labels(spec: &ChartSpec, categories: &[String]) -> Result<Vec<String>, ExportError> {
    let dates: Option<Vec<_>> = categories.iter().map(|c| parse_category_date(c)).collect();
    match dates {
        Some(dates) if !dates.is_empty() => {
            let format = spec.export_date_format();
            let unusable = || ExportError::DateFormat(format.to_string());
            dates
                .iter()
                .map(|d| format_date_with(d, format).ok_or_else(unusable))
                .collect()
        }
        _ => Ok(categories.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_spec::{Point, Series};

    #[test]
    fn test_pie_export() {
        let spec = ChartSpec::new("pi_projects_chart", ChartKind::Pie, "Projects").with_series(
            Series::unnamed_points(vec![Point::new("Active", 5.0), Point::new("Dormant", 2.0)]),
        );
        assert_eq!(to_csv(&spec).unwrap(), "Category,Share\nActive,5\nDormant,2\n");
    }

    #[test]
    fn test_month_names_left_alone() {
        let spec = ChartSpec::new("disk_space_storage_chart", ChartKind::Column, "Disk Space")
            .with_axes(["Jan", "Feb"])
            .with_series(Series::values("Home", vec![3.0, 2.0]))
            .with_series(Series::values("Scratch", vec![2.0, 3.5]));
        assert_eq!(
            to_csv(&spec).unwrap(),
            "Category,Home,Scratch\nJan,3,2\nFeb,2,3.5\n"
        );
    }

    #[test]
    fn test_time_series_dates_formatted() {
        let spec = ChartSpec::new("rate_of_usage_chart_core", ChartKind::Line, "Rate Of Usage")
            .with_axes(["Jan 2023", "Feb 2023"])
            .with_series(Series::values("CPU Time", vec![10.0, 12.0]))
            .with_csv_export();
        assert_eq!(
            to_csv(&spec).unwrap(),
            "Category,CPU Time\n2023-01-01,10\n2023-02-01,12\n"
        );

        let compact = ChartSpec::new("file_count_storage_chart", ChartKind::Column, "File Count")
            .with_axes(["20230101"])
            .with_series(Series::values("Home", vec![7.0]));
        assert_eq!(to_csv(&compact).unwrap(), "Category,Home\n2023-01-01,7\n");
    }

    #[test]
    fn test_custom_date_format() {
        let mut spec = ChartSpec::new("c", ChartKind::Line, "Custom")
            .with_axes(["2023-03-01"])
            .with_series(Series::values("v", vec![1.0]))
            .with_csv_export();
        if let Some(export) = spec.export.as_mut() {
            export.date_format = "%d/%m/%Y".to_string();
        }
        assert_eq!(to_csv(&spec).unwrap(), "Category,v\n01/03/2023,1\n");
    }

    #[test]
    fn test_bad_date_format_is_an_error() {
        let spec: ChartSpec = serde_json::from_str(
            r#"{
                "target_id": "disk_space_storage_chart",
                "kind": "column",
                "title": "Disk Space",
                "axes": ["2023-01-01"],
                "series": [{"name": "Home", "data": [3]}],
                "export": {"date_format": "%Q"}
            }"#,
        )
        .unwrap();
        assert!(matches!(to_csv(&spec), Err(ExportError::DateFormat(f)) if f == "%Q"));
    }

    #[test]
    fn test_labeled_points_union() {
        let spec = ChartSpec::new("user_usage_chart", ChartKind::StackedColumn, "Users")
            .with_series(Series::points(
                "Aaron",
                vec![Point::new("Jun", 6.0), Point::new("July", 8.0)],
            ))
            .with_series(Series::points("Ade", vec![Point::new("July", 3.0)]));
        assert_eq!(
            to_csv(&spec).unwrap(),
            "Category,Aaron,Ade\nJun,6,\nJuly,8,3\n"
        );
    }
}
