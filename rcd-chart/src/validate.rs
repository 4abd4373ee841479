//! Build-time checks run before a chart is placed into its region.

use crate::band::check_bands;
use crate::chart_spec::{ChartKind, ChartSpec, SeriesData};
use crate::error::{BandFault, RenderError, SeriesFault};
use rcd_utils::dates::is_date_format;
use std::collections::HashSet;

/// Check a spec against every configuration rule.
///
/// Region lookups are not done here; see [`Page::render`](crate::page::Page::render).
pub fn validate(spec: &ChartSpec) -> Result<(), RenderError> {
    let malformed = |fault| RenderError::MalformedSeries {
        target: spec.target_id.clone(),
        fault,
    };
    let invalid_bands = |fault| RenderError::InvalidBands {
        target: spec.target_id.clone(),
        fault,
    };

    check_values(spec).map_err(malformed)?;

    if spec.kind.is_cartesian() {
        check_cartesian(spec).map_err(malformed)?;
        check_bands(&spec.bands).map_err(invalid_bands)?;
    } else {
        check_pie(spec).map_err(malformed)?;
        if !spec.bands.is_empty() {
            return Err(invalid_bands(BandFault::NotCartesian));
        }
    }

    check_drilldown(spec).map_err(malformed)?;

    if let Some(export) = &spec.export {
        if !is_date_format(&export.date_format) {
            return Err(RenderError::InvalidDateFormat {
                target: spec.target_id.clone(),
                format: export.date_format.clone(),
            });
        }
    }
    Ok(())
}

fn check_values(spec: &ChartSpec) -> Result<(), SeriesFault> {
    for (i, series) in spec.series.iter().enumerate() {
        if series.data.numbers().any(|v| !v.is_finite()) {
            return Err(SeriesFault::NonFiniteValue {
                series: series.display_name(i),
            });
        }
    }
    for nested in &spec.drilldown {
        if nested.data.iter().any(|p| !p.value.is_finite()) {
            return Err(SeriesFault::NonFiniteValue {
                series: nested.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_cartesian(spec: &ChartSpec) -> Result<(), SeriesFault> {
    for (i, series) in spec.series.iter().enumerate() {
        if series.kind == Some(ChartKind::Pie) {
            return Err(SeriesFault::KindConflict {
                series: series.display_name(i),
                kind: ChartKind::Pie.to_string(),
            });
        }
        if let SeriesData::Values(values) = &series.data {
            let axes = spec.axes.as_ref().ok_or_else(|| SeriesFault::MissingAxes {
                series: series.display_name(i),
            })?;
            if values.len() != axes.len() {
                return Err(SeriesFault::LengthMismatch {
                    series: series.display_name(i),
                    expected: axes.len(),
                    found: values.len(),
                });
            }
        }
    }
    Ok(())
}

fn check_pie(spec: &ChartSpec) -> Result<(), SeriesFault> {
    if spec.axes.is_some() {
        return Err(SeriesFault::AxesOnPie);
    }
    for (i, series) in spec.series.iter().enumerate() {
        if let Some(kind) = series.kind.filter(|k| *k != ChartKind::Pie) {
            return Err(SeriesFault::KindConflict {
                series: series.display_name(i),
                kind: kind.to_string(),
            });
        }
        let SeriesData::Points(points) = &series.data else {
            return Err(SeriesFault::UnlabeledPieData {
                series: series.display_name(i),
            });
        };
        if let Some(p) = points.iter().find(|p| p.value < 0.0) {
            return Err(SeriesFault::NegativePieValue {
                label: p.label.clone(),
                value: p.value,
            });
        }
    }
    Ok(())
}

fn check_drilldown(spec: &ChartSpec) -> Result<(), SeriesFault> {
    let mut ids = HashSet::new();
    for nested in &spec.drilldown {
        if !ids.insert(nested.id.as_str()) {
            return Err(SeriesFault::DuplicateDrilldownId(nested.id.clone()));
        }
    }

    for series in &spec.series {
        let SeriesData::Points(points) = &series.data else {
            continue;
        };
        for point in points {
            if let Some(id) = &point.drilldown {
                if !ids.contains(id.as_str()) {
                    return Err(SeriesFault::UnresolvedDrilldown {
                        point: point.label.clone(),
                        id: id.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}
