use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SunspotApp {
    pub state: AppState,
}

impl SunspotApp {
    /// Create the app and load the configured dataset.
    pub fn new(config: DashboardConfig) -> Self {
        let data_path = config.data_path.clone();
        let mut state = AppState::new(config);
        state.load_path(&data_path);
        Self { state }
    }
}

impl eframe::App for SunspotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: parameters ----
        egui::SidePanel::left("param_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::dashboard(ui, &self.state);
        });
    }
}
