use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReportApp {
    pub state: AppState,
}

impl ReportApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Keyboard: cycle through charts ----
        let (next, prev) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowUp),
            )
        });
        if next {
            self.state.step(true);
        }
        if prev {
            self.state.step(false);
        }

        // ---- Top panel: output summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: chart list ----
        egui::SidePanel::left("view_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected chart ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.current() {
            Some(view) => plot::figure_plot(ui, &view.figure),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.heading("No charts were rendered");
                });
            }
        });
    }
}

/// Open the viewer window and block until it is closed.
pub fn show(state: AppState) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SmartScan Usability Report",
        options,
        Box::new(|_cc| Ok(Box::new(ReportApp::new(state)))),
    )
}
