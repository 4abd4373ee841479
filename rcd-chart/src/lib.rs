//! Chart definitions, validation and page rendering for the research
//! computing portal's analytics dashboards.
//!
//! A [`ChartSpec`] describes one Highcharts chart. A [`Page`] owns named
//! regions; rendering validates each spec and places it into its region.
//! [`Dashboard`] ties a set of specs to a page and to the generated HTML.

pub mod band;
pub mod chart_spec;
pub mod dashboard;
pub mod drilldown;
pub mod error;
pub mod export;
pub mod html;
pub mod options;
pub mod page;
pub mod pie;
pub mod validate;

pub use chart_spec::{Band, ChartKind, ChartSpec, DrilldownSeries, Point, Series, SeriesData};
pub use dashboard::Dashboard;
pub use drilldown::{DrillState, PointRef, Visible};
pub use error::{BandFault, DrillError, ExportError, RenderError, SeriesFault};
pub use options::Theme;
pub use page::{ChartView, Page, RenderReport, RenderedChart};
