use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::series::{Series, SeriesStyle};

/// Scatter plots are always drawn in a single fixed colour.
pub const SCATTER_COLOR: Color32 = Color32::from_rgb(46, 160, 67);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from blue so a single line is not drawn in red.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (220.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-chart colour assignment
// ---------------------------------------------------------------------------

/// Colour for every series of a chart, in order.
pub fn series_colors(series: &[Series]) -> Vec<Color32> {
    let lines = series.iter().filter(|s| s.style == SeriesStyle::Line).count();
    let mut line_colors = generate_palette(lines).into_iter();
    series
        .iter()
        .map(|s| match s.style {
            SeriesStyle::Line => line_colors.next().unwrap_or(Color32::LIGHT_BLUE),
            SeriesStyle::Scatter => SCATTER_COLOR,
        })
        .collect()
}
