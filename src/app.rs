use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PanelScoresApp {
    pub state: AppState,
}

impl PanelScoresApp {
    /// Create the app and kick off the one load of `data_path`.
    pub fn new(data_path: PathBuf) -> Self {
        let mut state = AppState::default();
        state.begin_load(data_path);
        Self { state }
    }
}

impl eframe::App for PanelScoresApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.loading() && !self.state.poll_load() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: search + details ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.loading() {
                panels::loading_screen(ui);
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui);
                    panels::search_panel(ui, &mut self.state);

                    let action = self
                        .state
                        .selected()
                        .map(|record| panels::student_details(ui, record));
                    match action {
                        Some(action) => panels::handle_detail_action(ctx, &mut self.state, action),
                        None => panels::empty_state(ui, self.state.phase),
                    }
                });
        });
    }
}
