/// Error types for chart building and rendering
use thiserror::Error;

/// Why a chart could not be rendered into its region.
///
/// Every variant names the chart's target region so that failures from
/// [`Page::render_all`](crate::page::Page::render_all) can be reported together.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The page has no region with this id
    #[error("no region named '{0}' on this page")]
    UnknownRegion(String),

    /// The region already displays a chart
    #[error("region '{0}' already holds a chart")]
    RegionOccupied(String),

    /// Series data does not fit the chart's axes or drilldown table
    #[error("malformed series in chart '{target}': {fault}")]
    MalformedSeries { target: String, fault: SeriesFault },

    /// Plot bands are inverted, out of order or overlapping
    #[error("invalid bands in chart '{target}': {fault}")]
    InvalidBands { target: String, fault: BandFault },

    /// The CSV export date format cannot render a date
    #[error("chart '{target}' has an unusable export date format '{format}'")]
    InvalidDateFormat { target: String, format: String },
}

impl RenderError {
    /// The region id the failed chart was aimed at.
    pub fn target_id(&self) -> &str {
        match self {
            RenderError::UnknownRegion(target) | RenderError::RegionOccupied(target) => target,
            RenderError::MalformedSeries { target, .. }
            | RenderError::InvalidBands { target, .. }
            | RenderError::InvalidDateFormat { target, .. } => target,
        }
    }
}

/// Series-level configuration faults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesFault {
    #[error("series '{series}' has {found} values but the chart has {expected} categories")]
    LengthMismatch {
        series: String,
        expected: usize,
        found: usize,
    },

    #[error("series '{series}' holds plain values but the chart has no category axis")]
    MissingAxes { series: String },

    #[error("pie series '{series}' must use labeled points")]
    UnlabeledPieData { series: String },

    #[error("pie charts do not take a category axis")]
    AxesOnPie,

    #[error("pie slice '{label}' has negative value {value}")]
    NegativePieValue { label: String, value: f64 },

    #[error("series '{series}' contains a value that is not a finite number")]
    NonFiniteValue { series: String },

    #[error("series '{series}' cannot be drawn as {kind} in this chart")]
    KindConflict { series: String, kind: String },

    #[error("point '{point}' refers to drilldown '{id}' which is not defined")]
    UnresolvedDrilldown { point: String, id: String },

    #[error("drilldown '{0}' is defined more than once")]
    DuplicateDrilldownId(String),
}

/// Plot band faults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandFault {
    #[error("band '{label}' runs from {low} down to {high}")]
    Inverted { label: String, low: f64, high: f64 },

    #[error("band '{label}' has a bound that is not a finite number")]
    NonFinite { label: String },

    #[error("band '{label}' starts below the band before it")]
    OutOfOrder { label: String },

    #[error("bands '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },

    #[error("bands are only drawn on charts with a category axis")]
    NotCartesian,
}

/// Drilldown interaction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrillError {
    #[error("series {series} has no point {index}")]
    NoSuchPoint { series: usize, index: usize },

    #[error("point '{0}' has no drilldown")]
    NoDrilldown(String),

    #[error("already drilled into '{0}'; go back first")]
    AlreadyDrilled(String),

    #[error("drilldown '{0}' is not defined")]
    Unresolved(String),
}

/// CSV export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Cannot format dates with '{0}'")]
    DateFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::MalformedSeries {
            target: "rate_of_usage_chart_core".to_string(),
            fault: SeriesFault::LengthMismatch {
                series: "CPU Time".to_string(),
                expected: 8,
                found: 7,
            },
        };
        assert_eq!(
            err.to_string(),
            "malformed series in chart 'rate_of_usage_chart_core': series 'CPU Time' has 7 values but the chart has 8 categories"
        );
        assert_eq!(err.target_id(), "rate_of_usage_chart_core");
    }

    #[test]
    fn test_unknown_region_target() {
        let err = RenderError::UnknownRegion("missing".to_string());
        assert_eq!(err.target_id(), "missing");
        assert_eq!(err.to_string(), "no region named 'missing' on this page");
    }
}
