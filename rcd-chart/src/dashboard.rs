//! Dashboard definition files and the built-in analytics dashboard.
//!
//! A dashboard file is JSON:
//!
//! ```json
//! {
//!   "title": "Project usage",
//!   "regions": ["pi_projects_chart"],
//!   "charts": [
//!     { "target_id": "pi_projects_chart", "kind": "pie", "title": "Projects",
//!       "series": [ { "data": [["Active", 5], ["Dormant", 2]] } ] }
//!   ]
//! }
//! ```
//!
//! `regions` is optional; without it the page gets one region per chart,
//! in chart order.

use crate::chart_spec::ChartSpec;
use crate::html;
use crate::options::Theme;
use crate::page::{Page, RenderReport};
use serde::{Deserialize, Serialize};

/// The portal's analytics dashboard, bundled at compile time.
static ANALYTICS_DASHBOARD_JSON: &str = include_str!("../../fixtures/analytics_dashboard.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    /// Region layout; defaults to the chart targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, charts: Vec<ChartSpec>) -> Self {
        Self {
            title: title.into(),
            theme: Theme::default(),
            regions: None,
            charts,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The analytics dashboard shipped with the portal.
    pub fn analytics_preset() -> serde_json::Result<Self> {
        Self::from_json(ANALYTICS_DASHBOARD_JSON)
    }

    /// An empty page laid out for this dashboard.
    pub fn page(&self) -> Page {
        match &self.regions {
            Some(regions) => Page::new(regions.iter().cloned()),
            None => Page::new(self.charts.iter().map(|c| c.target_id.clone())),
        }
    }

    /// Lay out a page and render every chart into it.
    pub fn render(&self) -> (Page, RenderReport) {
        let mut page = self.page();
        let report = page.render_all(self.charts.iter().cloned());
        (page, report)
    }

    /// Render the dashboard and produce its HTML page.
    pub fn to_html(&self) -> (String, RenderReport) {
        let (page, report) = self.render();
        (html::render_page(&self.title, &page, &self.theme), report)
    }

    pub fn chart(&self, target_id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.target_id == target_id)
    }
}
