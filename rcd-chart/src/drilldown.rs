//! Per-chart drilldown state: `Overview` or `Drilled` into one point.
//!
//! The top-level series are never touched while drilled; going back simply
//! returns to reading them, so the overview after `back` is the overview
//! from before activation.

use crate::chart_spec::{ChartSpec, DrilldownSeries, Series, SeriesData};
use crate::error::DrillError;

/// Position of a point within a chart: series index, then point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub series: usize,
    pub index: usize,
}

impl PointRef {
    pub fn new(series: usize, index: usize) -> Self {
        Self { series, index }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DrillState {
    #[default]
    Overview,
    Drilled { point: PointRef, id: String },
}

/// What a chart currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visible<'a> {
    Overview(&'a [Series]),
    Drilled {
        point: PointRef,
        series: &'a DrilldownSeries,
    },
}

impl DrillState {
    pub fn is_drilled(&self) -> bool {
        matches!(self, DrillState::Drilled { .. })
    }

    /// Activate a point, swapping the visible series for its nested series.
    pub fn activate<'a>(
        &mut self,
        spec: &'a ChartSpec,
        point: PointRef,
    ) -> Result<&'a DrilldownSeries, DrillError> {
        if let DrillState::Drilled { id, .. } = self {
            return Err(DrillError::AlreadyDrilled(id.clone()));
        }

        let target = spec
            .series
            .get(point.series)
            .and_then(|s| match &s.data {
                SeriesData::Points(points) => points.get(point.index),
                SeriesData::Values(_) => None,
            })
            .ok_or(DrillError::NoSuchPoint {
                series: point.series,
                index: point.index,
            })?;

        let id = target
            .drilldown
            .as_ref()
            .ok_or_else(|| DrillError::NoDrilldown(target.label.clone()))?;
        let nested = spec
            .drilldown_series(id)
            .ok_or_else(|| DrillError::Unresolved(id.clone()))?;

        log::debug!(
            "chart '{}': drilled into '{}' from point '{}'",
            spec.target_id,
            id,
            target.label
        );
        *self = DrillState::Drilled {
            point,
            id: id.clone(),
        };
        Ok(nested)
    }

    /// Return to the overview. Returns `false` if already there.
    pub fn back(&mut self) -> bool {
        match std::mem::take(self) {
            DrillState::Overview => false,
            DrillState::Drilled { .. } => true,
        }
    }

    pub fn visible<'a>(&self, spec: &'a ChartSpec) -> Visible<'a> {
        match self {
            DrillState::Overview => Visible::Overview(&spec.series),
            DrillState::Drilled { point, id } => match spec.drilldown_series(id) {
                Some(series) => Visible::Drilled {
                    point: *point,
                    series,
                },
                None => Visible::Overview(&spec.series),
            },
        }
    }
}
