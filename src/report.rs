use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ReportConfig;
use crate::data::loader::load_table;
use crate::export::export_svg;
use crate::figure::Figure;
use crate::views;

/// One view that was rendered and written to disk.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub name: &'static str,
    pub path: PathBuf,
    pub figure: Figure,
}

/// Run every requested view over the configured table.
///
/// View names are checked before the table is read, so a typo fails
/// without touching the file system.
pub fn generate(config: &ReportConfig) -> Result<Vec<RenderedView>> {
    let selected = views::resolve(&config.views)?;
    let mut dataset = load_table(&config.input_path, &config.format)?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;

    let mut rendered = Vec::with_capacity(selected.len());
    for view in selected {
        let figure = view
            .render(&mut dataset)
            .with_context(|| format!("rendering view '{}'", view.name()))?;

        let path = config.output_dir.join(format!("{}.svg", view.file_stem()));
        export_svg(&figure, &path)?;
        log::info!("Wrote {} to {}", view.name(), path.display());

        rendered.push(RenderedView {
            name: view.name(),
            path,
            figure,
        });
    }
    Ok(rendered)
}
