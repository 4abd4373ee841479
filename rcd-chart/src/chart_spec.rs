//! Declarative chart definitions.
//!
//! A [`ChartSpec`] describes one chart: which region it renders into, what
//! kind of chart it is, its category axis, its series, and the optional
//! drilldown table, plot bands and CSV export settings. Specs are plain
//! data; they are built once (from literals, a dashboard file, or the usage
//! roll-ups) and handed to a [`Page`](crate::page::Page) for rendering.

use rcd_utils::dates::DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of chart the dashboard can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Line,
    Spline,
    Column,
    StackedColumn,
}

impl ChartKind {
    /// Whether the chart has a category (x) axis.
    pub fn is_cartesian(self) -> bool {
        !matches!(self, ChartKind::Pie)
    }

    /// Series type name understood by Highcharts.
    pub fn highcharts_type(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Spline => "spline",
            ChartKind::Column | ChartKind::StackedColumn => "column",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Spline => "spline",
            ChartKind::Column => "column",
            ChartKind::StackedColumn => "stacked column",
        };
        f.write_str(name)
    }
}

/// A labeled data point: a pie slice, or a named column/bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PointRepr")]
pub struct Point {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub sliced: bool,
    /// Id of the nested series shown when this point is activated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drilldown: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Accepted JSON shapes for a point: `["Active", 5]`, `["Active", 5, true]`
/// or a full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair(String, f64),
    Triple(String, f64, bool),
    Full {
        label: String,
        value: f64,
        #[serde(default)]
        selected: bool,
        #[serde(default)]
        sliced: bool,
        #[serde(default)]
        drilldown: Option<String>,
    },
}

impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Pair(label, value) => Point::new(label, value),
            PointRepr::Triple(label, value, selected) => Point {
                selected,
                ..Point::new(label, value)
            },
            PointRepr::Full {
                label,
                value,
                selected,
                sliced,
                drilldown,
            } => Point {
                label,
                value,
                selected,
                sliced,
                drilldown,
            },
        }
    }
}

impl Point {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            selected: false,
            sliced: false,
            drilldown: None,
        }
    }

    /// Mark the point as selected and pulled out of the pie.
    pub fn highlighted(mut self) -> Self {
        self.selected = true;
        self.sliced = true;
        self
    }

    pub fn with_drilldown(mut self, id: impl Into<String>) -> Self {
        self.drilldown = Some(id.into());
        self
    }
}

/// Series payload: values aligned to the chart's categories, or labeled points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Points(Vec<Point>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(values) => values.len(),
            SeriesData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the raw numbers regardless of shape.
    pub fn numbers(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            SeriesData::Values(values) => Box::new(values.iter().copied()),
            SeriesData::Points(points) => Box::new(points.iter().map(|p| p.value)),
        }
    }
}

/// One named series within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Draw this series with a different kind than the chart (column + spline combos).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    pub data: SeriesData,
}

impl Series {
    pub fn values(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            kind: None,
            data: SeriesData::Values(values),
        }
    }

    pub fn points(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: Some(name.into()),
            kind: None,
            data: SeriesData::Points(points),
        }
    }

    /// Pie data is often unnamed.
    pub fn unnamed_points(points: Vec<Point>) -> Self {
        Self {
            name: None,
            kind: None,
            data: SeriesData::Points(points),
        }
    }

    pub fn drawn_as(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Name shown in legends and CSV headers; unnamed series are numbered from 1.
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Series {}", index + 1))
    }
}

/// A nested series revealed when a drilldown point is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrilldownSeries {
    pub id: String,
    pub name: String,
    pub data: Vec<Point>,
}

impl DrilldownSeries {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
        }
    }
}

/// A shaded value range on the y axis, e.g. "Good" efficiency between 50 and 75.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Band {
    pub fn new(low: f64, high: f64, label: impl Into<String>) -> Self {
        Self {
            low,
            high,
            label: label.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Y axis settings for Cartesian charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvExport {
    /// strftime format applied to date-like categories.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

impl Default for CsvExport {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// A declarative description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Region the chart renders into; unique per page.
    pub target_id: String,
    pub kind: ChartKind,
    pub title: String,
    /// Category labels, one per value in each plain-value series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxis>,
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drilldown: Vec<DrilldownSeries>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bands: Vec<Band>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<CsvExport>,
}

impl ChartSpec {
    pub fn new(target_id: impl Into<String>, kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            kind,
            title: title.into(),
            axes: None,
            y_axis: None,
            series: Vec::new(),
            drilldown: Vec::new(),
            bands: Vec::new(),
            export: None,
        }
    }

    pub fn with_axes<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axes = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_y_axis(mut self, title: impl Into<String>, max: Option<f64>) -> Self {
        self.y_axis = Some(YAxis {
            title: Some(title.into()),
            max,
        });
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_drilldown(mut self, nested: DrilldownSeries) -> Self {
        self.drilldown.push(nested);
        self
    }

    pub fn with_band(mut self, band: Band) -> Self {
        self.bands.push(band);
        self
    }

    pub fn with_csv_export(mut self) -> Self {
        self.export = Some(CsvExport::default());
        self
    }

    /// Look up a nested drilldown series by id.
    pub fn drilldown_series(&self, id: &str) -> Option<&DrilldownSeries> {
        self.drilldown.iter().find(|d| d.id == id)
    }

    /// Date format for CSV export, falling back to `YYYY-MM-DD`.
    pub fn export_date_format(&self) -> &str {
        self.export
            .as_ref()
            .map(|e| e.date_format.as_str())
            .unwrap_or(DATE_FORMAT)
    }
}
