//! Page regions and the chart builder.
//!
//! A [`Page`] is constructed with the ids of the regions it owns. Rendering
//! a [`ChartSpec`] validates it and places it into its (empty) region;
//! rendering a batch isolates failures so one bad definition cannot blank
//! the rest of the dashboard.

use crate::band::band_for;
use crate::chart_spec::{Band, ChartKind, ChartSpec, SeriesData};
use crate::drilldown::{DrillState, PointRef, Visible};
use crate::error::{DrillError, ExportError, RenderError};
use crate::export;
use crate::options::{chart_options, Theme};
use crate::pie::{shares, PieShare};
use crate::validate::validate;
use serde_json::Value;

/// Handle to a chart placed on a page, used to reach or dispose of it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    target_id: String,
    kind: ChartKind,
}

impl RenderedChart {
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }
}

/// A rendered chart: its definition plus everything computed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    spec: ChartSpec,
    drill: DrillState,
    pie_shares: Vec<Vec<PieShare>>,
}

impl ChartView {
    fn new(spec: ChartSpec) -> Self {
        let pie_shares = match spec.kind {
            ChartKind::Pie => spec
                .series
                .iter()
                .map(|s| match &s.data {
                    SeriesData::Points(points) => shares(points),
                    SeriesData::Values(_) => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self {
            spec,
            drill: DrillState::Overview,
            pie_shares,
        }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Displayed shares for a pie series; empty for other kinds.
    pub fn pie_shares(&self, series: usize) -> &[PieShare] {
        self.pie_shares.get(series).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bands in drawing order (ascending `low`).
    pub fn bands(&self) -> &[Band] {
        &self.spec.bands
    }

    /// Band label a value sits in, e.g. "Good" for 60% efficiency.
    pub fn band_label(&self, value: f64) -> Option<&str> {
        band_for(&self.spec.bands, value).map(|b| b.label.as_str())
    }

    pub fn drill_state(&self) -> &DrillState {
        &self.drill
    }

    pub fn visible(&self) -> Visible<'_> {
        self.drill.visible(&self.spec)
    }

    pub fn activate(&mut self, point: PointRef) -> Result<(), DrillError> {
        self.drill.activate(&self.spec, point).map(|_| ())
    }

    pub fn back(&mut self) -> bool {
        self.drill.back()
    }

    pub fn options(&self, theme: &Theme) -> Value {
        chart_options(&self.spec, theme)
    }

    pub fn to_csv(&self) -> Result<String, ExportError> {
        export::to_csv(&self.spec)
    }
}

/// A named area of the page that holds at most one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: String,
    chart: Option<ChartView>,
}

impl Region {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn chart(&self) -> Option<&ChartView> {
        self.chart.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.is_none()
    }
}

/// A chart that failed to render, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub target_id: String,
    pub error: RenderError,
}

/// Outcome of rendering a batch of charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub rendered: Vec<RenderedChart>,
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The set of regions charts render into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    regions: Vec<Region>,
}

impl Page {
    /// Create a page with the given region ids, in layout order.
    ///
    /// Repeated ids are kept once.
    pub fn new<I, S>(region_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut regions: Vec<Region> = Vec::new();
        for id in region_ids {
            let id = id.into();
            if regions.iter().any(|r| r.id == id) {
                log::warn!("region '{}' listed twice; keeping the first", id);
                continue;
            }
            regions.push(Region { id, chart: None });
        }
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Validate a chart and place it into its region.
    ///
    /// The region must exist and be empty. On error the page is unchanged.
    pub fn render(&mut self, spec: ChartSpec) -> Result<RenderedChart, RenderError> {
        let region = self
            .regions
            .iter_mut()
            .find(|r| r.id == spec.target_id)
            .ok_or_else(|| RenderError::UnknownRegion(spec.target_id.clone()))?;
        if region.chart.is_some() {
            return Err(RenderError::RegionOccupied(spec.target_id.clone()));
        }
        validate(&spec)?;

        let handle = RenderedChart {
            target_id: spec.target_id.clone(),
            kind: spec.kind,
        };
        log::debug!("rendered {} chart into '{}'", spec.kind, spec.target_id);
        region.chart = Some(ChartView::new(spec));
        Ok(handle)
    }

    /// Render every chart independently, collecting failures instead of stopping.
    pub fn render_all<I>(&mut self, specs: I) -> RenderReport
    where
        I: IntoIterator<Item = ChartSpec>,
    {
        let mut report = RenderReport::default();
        for spec in specs {
            match self.render(spec) {
                Ok(handle) => report.rendered.push(handle),
                Err(error) => {
                    log::warn!("chart not rendered: {}", error);
                    report.failures.push(RenderFailure {
                        target_id: error.target_id().to_string(),
                        error,
                    });
                }
            }
        }
        log::info!(
            "rendered {} charts, {} failed",
            report.rendered.len(),
            report.failures.len()
        );
        report
    }

    pub fn chart(&self, handle: &RenderedChart) -> Option<&ChartView> {
        self.region(&handle.target_id).and_then(Region::chart)
    }

    pub fn chart_mut(&mut self, handle: &RenderedChart) -> Option<&mut ChartView> {
        self.regions
            .iter_mut()
            .find(|r| r.id == handle.target_id)
            .and_then(|r| r.chart.as_mut())
    }

    /// Empty the chart's region. Returns `false` if it was already empty.
    pub fn dispose(&mut self, handle: RenderedChart) -> bool {
        self.regions
            .iter_mut()
            .find(|r| r.id == handle.target_id)
            .and_then(|r| r.chart.take())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_spec::{DrilldownSeries, Point, Series};

    fn jobs_chart(target: &str) -> ChartSpec {
        ChartSpec::new(target, ChartKind::Column, "Number of jobs per month")
            .with_axes(["Jan", "Feb", "Mar"])
            .with_series(Series::values("Number of Jobs", vec![3.0, 2.0, 1.0]))
    }

    #[test]
    fn test_render_into_region() {
        let mut page = Page::new(["num_slurm_jobs_chart"]);
        let handle = page.render(jobs_chart("num_slurm_jobs_chart")).unwrap();
        assert_eq!(handle.target_id(), "num_slurm_jobs_chart");
        assert_eq!(handle.kind(), ChartKind::Column);
        assert!(page.chart(&handle).is_some());
        assert!(!page.regions()[0].is_empty());
    }

    #[test]
    fn test_unknown_and_occupied_regions() {
        let mut page = Page::new(["a"]);
        assert_eq!(
            page.render(jobs_chart("b")),
            Err(RenderError::UnknownRegion("b".to_string()))
        );
        page.render(jobs_chart("a")).unwrap();
        assert_eq!(
            page.render(jobs_chart("a")),
            Err(RenderError::RegionOccupied("a".to_string()))
        );
    }

    #[test]
    fn test_failed_render_leaves_region_empty() {
        let mut page = Page::new(["a"]);
        let bad = jobs_chart("a").with_series(Series::values("short", vec![1.0]));
        assert!(matches!(
            page.render(bad),
            Err(RenderError::MalformedSeries { .. })
        ));
        assert!(page.region("a").map(Region::is_empty).unwrap_or(false));
    }

    #[test]
    fn test_render_all_isolates_failures() {
        let ids = ["one", "two", "three", "bad"];
        let mut page = Page::new(ids);
        let specs = vec![
            jobs_chart("one"),
            jobs_chart("bad").with_series(Series::values("short", vec![1.0])),
            jobs_chart("two"),
            jobs_chart("three"),
        ];
        let report = page.render_all(specs);
        assert_eq!(report.rendered.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].target_id, "bad");
        assert!(!report.is_clean());
        assert!(page.region("bad").map(Region::is_empty).unwrap_or(false));
    }

    #[test]
    fn test_duplicate_targets_in_batch() {
        let mut page = Page::new(["a", "a"]);
        assert_eq!(page.regions().len(), 1);
        let report = page.render_all(vec![jobs_chart("a"), jobs_chart("a")]);
        assert_eq!(report.rendered.len(), 1);
        assert_eq!(
            report.failures[0].error,
            RenderError::RegionOccupied("a".to_string())
        );
    }

    #[test]
    fn test_dispose_frees_region() {
        let mut page = Page::new(["a"]);
        let handle = page.render(jobs_chart("a")).unwrap();
        assert!(page.dispose(handle.clone()));
        assert!(page.chart(&handle).is_none());
        assert!(!page.dispose(handle));
        assert!(page.render(jobs_chart("a")).is_ok());
    }

    #[test]
    fn test_pie_view_shares() {
        let mut page = Page::new(["pi_projects_chart"]);
        let spec = ChartSpec::new("pi_projects_chart", ChartKind::Pie, "Projects").with_series(
            Series::unnamed_points(vec![
                Point::new("Active", 5.0),
                Point::new("Dormant", 2.0),
                Point::new("Inactive", 1.0),
                Point::new("Retired", 1.0),
            ]),
        );
        let handle = page.render(spec).unwrap();
        let view = page.chart(&handle).unwrap();
        let shown: Vec<String> = view.pie_shares(0).iter().map(PieShare::display).collect();
        assert_eq!(shown, vec!["55.6%", "22.2%", "11.1%", "11.1%"]);
        assert!(view.pie_shares(1).is_empty());
    }

    #[test]
    fn test_banded_view_keeps_values() {
        let mut page = Page::new(["compute_efficiency_chart"]);
        let spec = ChartSpec::new("compute_efficiency_chart", ChartKind::Spline, "Efficiency")
            .with_axes(["Jan", "Feb"])
            .with_series(Series::values("Efficiency", vec![20.0, 140.0]))
            .with_band(Band::new(0.0, 40.0, "Poor"))
            .with_band(Band::new(75.0, 100.0, "Excellent"));
        let handle = page.render(spec).unwrap();
        let view = page.chart(&handle).unwrap();

        let lows: Vec<f64> = view.bands().iter().map(|b| b.low).collect();
        assert_eq!(lows, vec![0.0, 75.0]);
        assert_eq!(view.band_label(20.0), Some("Poor"));
        assert_eq!(view.band_label(140.0), None);
        assert_eq!(
            view.spec().series[0].data,
            SeriesData::Values(vec![20.0, 140.0])
        );
    }

    #[test]
    fn test_drilldown_round_trip_on_page() {
        let mut page = Page::new(["user_usage_chart"]);
        let spec = ChartSpec::new("user_usage_chart", ChartKind::StackedColumn, "Users")
            .with_series(Series::points(
                "Aaron",
                vec![Point::new("Jun", 6.0).with_drilldown("jun_aaron")],
            ))
            .with_drilldown(DrilldownSeries::new(
                "jun_aaron",
                "Jun",
                vec![Point::new("CPU Time", 3.0)],
            ));
        let overview = spec.series.clone();
        let handle = page.render(spec).unwrap();

        let view = page.chart_mut(&handle).unwrap();
        view.activate(PointRef::new(0, 0)).unwrap();
        assert!(view.drill_state().is_drilled());
        assert!(matches!(view.visible(), Visible::Drilled { .. }));
        assert!(view.back());
        assert_eq!(view.visible(), Visible::Overview(&overview));
    }
}
