//! Chart-ready values built from the transform engine.
//!
//! Nothing here draws; `ui::plot` turns a [`Chart`] into egui widgets.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DashboardParams;
use crate::data::model::Table;
use crate::data::series::Series;
use crate::data::window;
use crate::error::Result;

pub const TIME_AXIS_LABEL: &str = "Time (Years)";

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// A titled plot with axis labels and one or more series.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// Both dashboard charts for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub time_series: Chart,
    pub cycle_variability: Chart,
}

/// Raw vs. smoothed monthly totals over the selected years.
pub fn build_time_series(table: &Table, params: &DashboardParams) -> Result<Chart> {
    let selected = table.select_range(params.start_year, params.end_year)?;
    let raw = window::raw_series(selected);
    let smoothed = window::rolling_average(selected, params.smoothing_window)?;

    Ok(Chart {
        title: "Monthly Sunspot Totals".to_string(),
        x_label: TIME_AXIS_LABEL.to_string(),
        y_label: "Sunspots (Monthly Total)".to_string(),
        series: vec![raw, smoothed],
    })
}

/// Monthly totals folded onto a single cycle of `params.cycle_length` years.
pub fn build_cycle_variability(table: &Table, params: &DashboardParams) -> Result<Chart> {
    let selected = table.select_range(params.start_year, params.end_year)?;
    let folded = window::cycle_residual(selected, params.cycle_length)?;

    Ok(Chart {
        title: "Cycle Variability".to_string(),
        x_label: TIME_AXIS_LABEL.to_string(),
        y_label: "Number of Sunspots".to_string(),
        series: vec![folded],
    })
}

/// Validate `params` and build both charts. Fails without side effects.
pub fn build_dashboard(table: &Table, params: &DashboardParams) -> Result<DashboardCharts> {
    params.validate(table)?;
    let charts = DashboardCharts {
        time_series: build_time_series(table, params)?,
        cycle_variability: build_cycle_variability(table, params)?,
    };
    debug!(
        "recomputed {params:?}: raw={} smoothed={} residual={}",
        charts.time_series.series[0].len(),
        charts.time_series.series[1].len(),
        charts.cycle_variability.series[0].len()
    );
    Ok(charts)
}

// ---------------------------------------------------------------------------
// Static sun images
// ---------------------------------------------------------------------------

/// An externally hosted image shown below the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunImage {
    /// Hover text.
    pub title: String,
    pub url: String,
}

impl SunImage {
    /// Latest SOHO / SDO realtime frames.
    pub fn realtime_defaults() -> Vec<SunImage> {
        [
            (
                "Real Time SDO/HMI Continuum Image",
                "https://soho.nascom.nasa.gov/data/realtime/hmi_igr/1024/latest.jpg",
            ),
            (
                "Real Time EIT 171 Image",
                "https://soho.nascom.nasa.gov/data/realtime/eit_171/1024/latest.jpg",
            ),
            (
                "Real Time SDO/HMI Magnetogram Image",
                "https://soho.nascom.nasa.gov/data/realtime/hmi_mag/1024/latest.jpg",
            ),
        ]
        .into_iter()
        .map(|(title, url)| SunImage {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
    }
}
