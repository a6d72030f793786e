use anyhow::Result;
use eframe::egui;
use log::info;

mod config;
mod data;
mod ui;

use config::AppConfig;
use data::document::HtmlTable;
use ui::EntryApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(config::CONFIG_FILE)?;
    let table = HtmlTable::new(&config.document_path, config.table_id.clone());
    info!(
        "Starting entry form for table '{}' in {}",
        config.table_id,
        table.path().display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 480.0])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(EntryApp::new(cc, Box::new(table))))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
