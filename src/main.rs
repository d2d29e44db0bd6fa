use anyhow::Context;
use eframe::egui;

use sunspot_dash::app::SunspotApp;
use sunspot_dash::config::DashboardConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env().context("loading dashboard configuration")?;
    log::info!("Using dataset {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sunspot Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and decode the sun images.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SunspotApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
