use eframe::egui::{self, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::series_colors;
use crate::dashboard::{Chart, SunImage};
use crate::data::series::SeriesStyle;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 320.0;
const SUN_IMAGE_SIZE: f32 = 400.0;

// ---------------------------------------------------------------------------
// Central panel – charts and images
// ---------------------------------------------------------------------------

/// Render both charts and the sun images in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let charts = match &state.charts {
        Some(charts) => charts,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a sunspot file to begin  (File → Open…)");
            });
            return;
        }
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| ui.heading("Sunspot Dashboard"));
            ui.add_space(8.0);

            section_heading(ui, "How Have Monthly Sunspot Totals Looked in the Past?");
            chart(ui, "time_series_chart", &charts.time_series);

            section_heading(ui, "What is the Variability of the Sunspot Cycle?");
            chart(ui, "cycle_var_chart", &charts.cycle_variability);

            section_heading(ui, "Real Time Sun Images");
            ui.vertical_centered(|ui: &mut Ui| ui.label("Hover over each image to see title."));
            sun_images(ui, &state.config.images);
        });
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui: &mut Ui| ui.strong(text));
}

/// Draw one chart. Line series are joined; scatter series never are.
fn chart(ui: &mut Ui, id: &str, chart: &Chart) {
    let colors = series_colors(&chart.series);

    ui.label(chart.title.as_str());
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, color) in chart.series.iter().zip(colors) {
                let points: PlotPoints = series.points.iter().copied().collect();
                match series.style {
                    SeriesStyle::Line => {
                        plot_ui.line(Line::new(points).name(&series.name).color(color).width(1.5))
                    }
                    SeriesStyle::Scatter => plot_ui.points(
                        Points::new(points)
                            .name(&series.name)
                            .color(color)
                            .radius(2.0),
                    ),
                }
            }
        });
}

fn sun_images(ui: &mut Ui, images: &[SunImage]) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for image in images {
            ui.add(
                egui::Image::new(image.url.as_str())
                    .fit_to_exact_size(Vec2::splat(SUN_IMAGE_SIZE))
                    .rounding(4.0),
            )
            .on_hover_text(image.title.as_str());
        }
    });
}
