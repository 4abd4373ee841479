//! Highcharts options built from a [`ChartSpec`].
//!
//! The dashboard page hands each object to `Highcharts.chart(id, options)`.
//! Options are assembled with `serde_json::json!` so the page template never
//! has to know the chart library's schema.

use crate::chart_spec::{Band, ChartKind, ChartSpec, Point, Series, SeriesData};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Title styling shared by every chart on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title_color: String,
    pub title_font_size: String,
    pub title_font_family: String,
    /// Fill for plot bands that do not name their own colour, alternating
    /// with a transparent fill.
    pub band_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_color: "#5e6e82".to_string(),
            title_font_size: "16px".to_string(),
            title_font_family: "Lato".to_string(),
            band_color: "rgba(68, 170, 213, 0.1)".to_string(),
        }
    }
}

/// Build the full options object for one chart.
pub fn chart_options(spec: &ChartSpec, theme: &Theme) -> Value {
    let mut options = Map::new();

    options.insert(
        "chart".into(),
        match spec.kind {
            ChartKind::Pie => json!({
                "type": "pie",
                "plotBackgroundColor": null,
                "plotBorderWidth": null,
                "plotShadow": false,
            }),
            kind => json!({ "type": kind.highcharts_type() }),
        },
    );
    options.insert(
        "title".into(),
        json!({
            "text": spec.title,
            "style": {
                "color": theme.title_color,
                "fontSize": theme.title_font_size,
                "fontFamily": theme.title_font_family,
            }
        }),
    );

    if spec.kind.is_cartesian() {
        options.insert("xAxis".into(), x_axis(spec));
        options.insert("yAxis".into(), y_axis(spec, theme));
    } else {
        options.insert(
            "tooltip".into(),
            json!({ "pointFormat": "{series.name}: <b>{point.percentage:.1f}%</b>" }),
        );
        options.insert(
            "plotOptions".into(),
            json!({
                "pie": {
                    "allowPointSelect": true,
                    "cursor": "pointer",
                    "dataLabels": { "enabled": false },
                    "showInLegend": true,
                }
            }),
        );
    }

    if spec.kind == ChartKind::StackedColumn {
        options.insert(
            "plotOptions".into(),
            json!({ "series": { "borderWidth": 0, "stacking": "normal" } }),
        );
        options.insert("legend".into(), json!({ "enabled": true }));
    }

    options.insert(
        "series".into(),
        Value::Array(
            spec.series
                .iter()
                .enumerate()
                .map(|(i, s)| series_options(spec, s, i))
                .collect(),
        ),
    );

    if !spec.drilldown.is_empty() {
        let nested: Vec<Value> = spec
            .drilldown
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "name": d.name,
                    "data": d.data.iter().map(|p| json!([p.label, p.value])).collect::<Vec<_>>(),
                })
            })
            .collect();
        options.insert("drilldown".into(), json!({ "series": nested }));
    }

    if let Some(export) = &spec.export {
        // Highcharts takes the same strftime-style directives chrono does
        options.insert(
            "exporting".into(),
            json!({ "csv": { "dateFormat": export.date_format } }),
        );
    }

    Value::Object(options)
}

fn x_axis(spec: &ChartSpec) -> Value {
    match &spec.axes {
        Some(categories) => json!({ "categories": categories }),
        None => json!({ "type": "category" }),
    }
}

fn y_axis(spec: &ChartSpec, theme: &Theme) -> Value {
    let mut axis = Map::new();
    if let Some(y) = &spec.y_axis {
        if let Some(title) = &y.title {
            axis.insert("title".into(), json!({ "text": title }));
        }
        if let Some(max) = y.max {
            axis.insert("max".into(), json!(max));
        }
    }
    if !spec.bands.is_empty() {
        axis.insert("minorGridLineWidth".into(), json!(0));
        axis.insert("gridLineWidth".into(), json!(0));
        axis.insert(
            "plotBands".into(),
            Value::Array(
                spec.bands
                    .iter()
                    .enumerate()
                    .map(|(i, b)| band_options(b, i, theme))
                    .collect(),
            ),
        );
    }
    Value::Object(axis)
}

fn band_options(band: &Band, index: usize, theme: &Theme) -> Value {
    let color = band.color.clone().unwrap_or_else(|| {
        if index % 2 == 0 {
            theme.band_color.clone()
        } else {
            "rgba(0, 0, 0, 0)".to_string()
        }
    });
    json!({
        "from": band.low,
        "to": band.high,
        "color": color,
        "label": { "text": band.label, "style": { "color": "#606060" } },
    })
}

fn series_options(spec: &ChartSpec, series: &Series, index: usize) -> Value {
    let mut out = Map::new();
    out.insert("name".into(), json!(series.display_name(index)));
    if let Some(kind) = series.kind {
        out.insert("type".into(), json!(kind.highcharts_type()));
    }
    if spec.kind == ChartKind::Pie {
        out.insert("colorByPoint".into(), json!(true));
    }
    let data = match &series.data {
        SeriesData::Values(values) => json!(values),
        SeriesData::Points(points) => Value::Array(points.iter().map(point_options).collect()),
    };
    out.insert("data".into(), data);
    Value::Object(out)
}

fn point_options(point: &Point) -> Value {
    let mut out = Map::new();
    out.insert("name".into(), json!(point.label));
    out.insert("y".into(), json!(point.value));
    if point.selected {
        out.insert("selected".into(), json!(true));
    }
    if point.sliced {
        out.insert("sliced".into(), json!(true));
    }
    if let Some(id) = &point.drilldown {
        out.insert("drilldown".into(), json!(id));
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_spec::DrilldownSeries;

    #[test]
    fn test_pie_options() {
        let spec = ChartSpec::new("pi_projects_chart", ChartKind::Pie, "Principal Investigator's Projects")
            .with_series(Series::unnamed_points(vec![
                Point::new("Active", 5.0).highlighted(),
                Point::new("Dormant", 2.0),
            ]))
            .with_csv_export();
        let options = chart_options(&spec, &Theme::default());

        assert_eq!(options["chart"]["type"], "pie");
        assert_eq!(options["title"]["style"]["fontFamily"], "Lato");
        assert_eq!(options["series"][0]["name"], "Series 1");
        assert_eq!(options["series"][0]["data"][0]["name"], "Active");
        assert_eq!(options["series"][0]["data"][0]["sliced"], true);
        assert!(options["series"][0]["data"][1].get("sliced").is_none());
        assert_eq!(options["exporting"]["csv"]["dateFormat"], "%Y-%m-%d");
        assert!(options.get("xAxis").is_none());
    }

    #[test]
    fn test_banded_spline_options() {
        let spec = ChartSpec::new("compute_efficiency_chart", ChartKind::Spline, "Efficiency")
            .with_axes(["Jan", "Feb"])
            .with_y_axis("Efficiency", Some(100.0))
            .with_series(Series::values("Efficiency", vec![10.0, 20.0]))
            .with_band(Band::new(0.0, 40.0, "Poor"))
            .with_band(Band::new(40.0, 50.0, "Fair").with_color("#eeeeee"));
        let options = chart_options(&spec, &Theme::default());

        assert_eq!(options["chart"]["type"], "spline");
        assert_eq!(options["xAxis"]["categories"][1], "Feb");
        assert_eq!(options["yAxis"]["max"], 100.0);
        let bands = options["yAxis"]["plotBands"].as_array().unwrap();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0]["label"]["text"], "Poor");
        assert_eq!(bands[0]["color"], "rgba(68, 170, 213, 0.1)");
        assert_eq!(bands[1]["color"], "#eeeeee");
    }

    #[test]
    fn test_stacked_drilldown_options() {
        let spec = ChartSpec::new("user_usage_chart", ChartKind::StackedColumn, "Individual User Usage")
            .with_series(Series::points(
                "Aaron",
                vec![Point::new("Jun", 6.0).with_drilldown("jun_aaron")],
            ))
            .with_drilldown(DrilldownSeries::new(
                "jun_aaron",
                "Jun",
                vec![Point::new("CPU Time", 3.0)],
            ));
        let options = chart_options(&spec, &Theme::default());

        assert_eq!(options["chart"]["type"], "column");
        assert_eq!(options["plotOptions"]["series"]["stacking"], "normal");
        assert_eq!(options["xAxis"]["type"], "category");
        assert_eq!(options["series"][0]["data"][0]["drilldown"], "jun_aaron");
        assert_eq!(options["drilldown"]["series"][0]["data"][0][0], "CPU Time");
    }

    #[test]
    fn test_combo_series_type() {
        let spec = ChartSpec::new("number_of_processors_chart", ChartKind::Column, "Core count")
            .with_axes(["Jan"])
            .with_series(Series::values("Total cores", vec![3.0]))
            .with_series(Series::values("Average cores per job", vec![1.5]).drawn_as(ChartKind::Spline));
        let options = chart_options(&spec, &Theme::default());
        assert!(options["series"][0].get("type").is_none());
        assert_eq!(options["series"][1]["type"], "spline");
    }
}
