use std::path::Path;

use log::{info, warn};

use crate::config::{DashboardConfig, DashboardParams};
use crate::dashboard::{self, DashboardCharts};
use crate::data::loader;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until a file loads successfully).
    pub table: Option<Table>,

    /// Parameters as currently set by the controls.
    pub params: DashboardParams,

    /// Parameters the displayed charts were built from.
    applied: Option<DashboardParams>,

    /// Last successfully built charts; kept on screen when a rebuild fails.
    pub charts: Option<DashboardCharts>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let params = DashboardParams {
            start_year: config.initial_years[0],
            end_year: config.initial_years[1],
            smoothing_window: config.smoothing_window,
            cycle_length: config.cycle_length,
        };
        Self {
            config,
            table: None,
            params,
            applied: None,
            charts: None,
            status_message: None,
        }
    }

    /// Load a dataset from disk. On failure the current table stays.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(table) => {
                info!(
                    "Loaded {} monthly records from {} ({:?}..={:?}, {} missing)",
                    table.len(),
                    path.display(),
                    table.first_year(),
                    table.last_year(),
                    table.missing_count()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error loading {}: {e}", path.display()));
            }
        }
    }

    /// Ingest a newly loaded table and build its charts.
    pub fn set_table(&mut self, table: Table) {
        self.params = self.config.initial_params(&table);
        self.table = Some(table);
        self.applied = None;
        self.charts = None;
        self.status_message = None;
        self.refresh();
    }

    /// Rebuild the charts if the parameters changed since the last attempt.
    pub fn refresh(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        if self.applied == Some(self.params) {
            return;
        }
        self.applied = Some(self.params);

        match dashboard::build_dashboard(table, &self.params) {
            Ok(charts) => {
                self.charts = Some(charts);
                self.status_message = None;
            }
            Err(e) => {
                warn!("Rejected parameters {:?}: {e}", self.params);
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Year bounds of the loaded table for the range controls.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let table = self.table.as_ref()?;
        Some((table.first_year()?, table.last_year()?))
    }
}
