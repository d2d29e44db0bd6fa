use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – parameter controls
// ---------------------------------------------------------------------------

/// Render the parameter panel. Rebuilds the charts when a control changes.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    let Some((first_year, last_year)) = state.year_bounds() else {
        ui.label("No dataset loaded.");
        return;
    };

    let params = &mut state.params;

    ui.label(RichText::new("Adjust Desired Time Period:").color(Color32::LIGHT_BLUE));
    ui.add(Slider::new(&mut params.start_year, first_year..=last_year).text("from"));
    ui.add(Slider::new(&mut params.end_year, first_year..=last_year).text("to"));
    // Dragging one end past the other drags the other end along.
    if params.start_year > params.end_year {
        params.end_year = params.start_year;
    }
    ui.separator();

    ui.label(RichText::new("Adjust Desired Number of Months to Smooth:").color(Color32::LIGHT_RED));
    ui.add(
        Slider::new(
            &mut params.smoothing_window,
            1..=state.config.max_smoothing_window,
        )
        .text("months"),
    );
    ui.separator();

    ui.label(
        RichText::new("Adjust Desired Number of Years for Cycle Period:")
            .color(Color32::LIGHT_GREEN),
    );
    ui.add(
        Slider::new(
            &mut params.cycle_length,
            state.config.min_cycle_length..=state.config.max_cycle_length,
        )
        .text("years"),
    );

    state.refresh();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!("{} monthly records loaded", table.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open monthly sunspot data")
        .add_filter("Semicolon-separated", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
