mod app;
mod color;
mod config;
mod data;
mod error;
mod export;
mod figure;
mod group;
mod report;
mod state;
mod ui;
mod views;

use anyhow::Result;

use config::ReportConfig;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ReportConfig::default();
    let rendered = report::generate(&config)?;
    log::info!(
        "Rendered {} of {} requested views",
        rendered.len(),
        config.views.len()
    );

    if config.display && !rendered.is_empty() {
        let state = AppState::new(rendered, config.output_dir.clone());
        app::show(state).map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))?;
    }
    Ok(())
}
