mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::MatchdayApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Fail fast: a malformed bundled dataset must never reach the window.
    let dataset = data::loader::load_bundled().context("loading bundled dataset")?;
    log::info!(
        "Loaded {} matches across {} sports",
        dataset.len(),
        dataset.sports.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Matchday",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the team logos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MatchdayApp::new(dataset)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
