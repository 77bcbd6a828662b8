use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::color::to_color32;
use crate::figure::Series;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart list
// ---------------------------------------------------------------------------

/// Render the chart list; clicking an entry shows that chart.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Charts");
    ui.separator();

    if state.views.is_empty() {
        ui.label("No charts rendered.");
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, view) in state.views.iter().enumerate() {
                let text = RichText::new(&view.figure.title).strong();
                let response = ui
                    .selectable_label(idx == state.selected, text)
                    .on_hover_text(view.path.display().to_string());
                if response.clicked() {
                    clicked = Some(idx);
                }
            }

            // ---- Legend of the selected chart ----
            if let Some(view) = state.current() {
                ui.separator();
                ui.strong(view.name);
                for series in &view.figure.series {
                    if let (Some(label), Some(color)) = (series.label(), series_color(series)) {
                        ui.label(RichText::new(label).color(color));
                    }
                }
            }
        });

    if let Some(idx) = clicked {
        state.select(idx);
    }
}

fn series_color(series: &Series) -> Option<Color32> {
    match series {
        Series::Bars { color, .. } | Series::Scatter { color, .. } => Some(to_color32(*color)),
        Series::Line { .. } | Series::ErrorBars { .. } => None,
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary bar: where the files went and how many there are.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} charts written to {}",
            state.views.len(),
            state.output_dir.display()
        ));

        ui.separator();

        if let Some(view) = state.current() {
            ui.label(RichText::new(view.path.display().to_string()).monospace());
        }
    });
}
