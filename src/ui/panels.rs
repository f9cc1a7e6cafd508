use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use crate::color::{band_color, score_color};
use crate::data::metrics::{average_score, band, chart_points, format_score, RecordSummary};
use crate::data::model::EvaluationRecord;
use crate::state::{AppState, LoadPhase};
use crate::ui::plot;

const MUTED: Color32 = Color32::from_gray(110);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = state.source.is_some() && !state.loading();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        match state.phase {
            LoadPhase::Loaded => {
                ui.label(format!("{} evaluations loaded", state.records.len()));
            }
            LoadPhase::Loading => {
                ui.label("Loading…");
            }
            LoadPhase::Uninitialized | LoadPhase::LoadFailed => {}
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.heading(RichText::new("Career Mentorship Program").strong().size(26.0));
    ui.label(RichText::new("Student Performance Dashboard").color(MUTED));
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Loading state
// ---------------------------------------------------------------------------

pub fn loading_screen(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add(egui::Spinner::new().size(48.0));
            ui.label(RichText::new("Loading student data...").color(MUTED));
        });
    });
}

// ---------------------------------------------------------------------------
// Search box + result dropdown
// ---------------------------------------------------------------------------

/// Render the search field and, while it has text, the matching students.
pub fn search_panel(ui: &mut Ui, state: &mut AppState) {
    card(ui, |ui: &mut Ui| {
        let mut term = state.search_term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("🔍 Search for a student by name...")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Heading),
        );
        if response.changed() {
            state.set_search_term(term);
        }

        if state.search_term.is_empty() {
            return;
        }

        if state.matches.is_empty() {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "No students found matching \"{}\"",
                    state.search_term
                ))
                .color(MUTED),
            );
            return;
        }

        let mut chosen = None;
        ui.add_space(6.0);
        ScrollArea::vertical()
            .max_height(256.0)
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                for (idx, record) in state.matched_records() {
                    let response = ui.add(
                        egui::Button::new(search_result_text(record))
                            .frame(false)
                            .min_size(egui::vec2(ui.available_width(), 0.0)),
                    );
                    if response.clicked() {
                        chosen = Some(idx);
                    }
                    ui.separator();
                }
            });

        if let Some(idx) = chosen {
            state.select(idx);
        }
    });
}

fn search_result_text(record: &EvaluationRecord) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    RichText::new(format!("{}\n", record.student_name))
        .strong()
        .append_to(&mut job, &egui::Style::default(), egui::FontSelection::Default, egui::Align::LEFT);
    RichText::new(format!(
        "Avg Score: {}/5.0 • Evaluated by {}",
        format_score(average_score(record)),
        record.panelist_name
    ))
    .small()
    .color(MUTED)
    .append_to(&mut job, &egui::Style::default(), egui::FontSelection::Default, egui::Align::LEFT);
    job
}

// ---------------------------------------------------------------------------
// Empty states
// ---------------------------------------------------------------------------

pub fn empty_state(ui: &mut Ui, phase: LoadPhase) {
    card(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            if phase == LoadPhase::LoadFailed {
                ui.heading("No data loaded");
                ui.label(RichText::new("Open an evaluation export with File → Open…").color(MUTED));
            } else {
                ui.heading("Search for a Student");
                ui.label(
                    RichText::new("Use the search bar above to find and view student performance data")
                        .color(MUTED),
                );
            }
            ui.add_space(24.0);
        });
    });
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Render everything known about the selected record.
pub fn student_details(ui: &mut Ui, record: &EvaluationRecord) -> DetailAction {
    let mut action = DetailAction::None;
    let average = average_score(record);
    let points = chart_points(record);

    card(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.heading(RichText::new(&record.student_name).strong().size(26.0));
                ui.label(
                    RichText::new(format!("Evaluated by: {}", record.panelist_name)).color(MUTED),
                );
                ui.label(RichText::new(&record.timestamp).small().color(MUTED));
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("Copy as JSON").clicked() {
                        action = DetailAction::CopySummary;
                    }
                    if ui.small_button("Close").clicked() {
                        action = DetailAction::Close;
                    }
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui: &mut Ui| {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(format_score(average))
                            .size(36.0)
                            .strong()
                            .color(score_color(average)),
                    );
                    ui.label(RichText::new("Average Score").color(MUTED));
                    ui.label(RichText::new("out of 5.0").small().color(MUTED));
                });
            });
        });
    });

    card(ui, |ui: &mut Ui| {
        ui.heading("Performance Metrics");
        ui.add_space(8.0);
        plot::radar_chart(ui, &points, 400.0);
        ui.add_space(12.0);

        StripBuilder::new(ui)
            .sizes(Size::exact(64.0), 2)
            .vertical(|mut rows| {
                for row in points.chunks(3) {
                    rows.strip(|builder| {
                        builder
                            .sizes(Size::remainder(), row.len())
                            .horizontal(|mut cells| {
                                for point in row {
                                    cells.cell(|ui: &mut Ui| {
                                        rating_card(ui, point.skill, point.value);
                                    });
                                }
                            });
                    });
                }
            });
    });

    text_section(ui, "Overall Interview Performance", &record.overall);
    text_section(ui, "Qualitative Feedback & Comments", &record.feedback);

    action
}

/// What the user asked for from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    CopySummary,
    Close,
}

/// Apply a detail-view action to the session.
pub fn handle_detail_action(ctx: &egui::Context, state: &mut AppState, action: DetailAction) {
    match action {
        DetailAction::None => {}
        DetailAction::Close => state.clear_selection(),
        DetailAction::CopySummary => {
            let Some(record) = state.selected() else {
                return;
            };
            match RecordSummary::new(record).to_json() {
                Ok(json) => {
                    log::info!("Copied summary for {}", record.student_name);
                    ctx.copy_text(json);
                    state.status_message = None;
                }
                Err(e) => {
                    log::error!("Failed to serialise summary: {e}");
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
        }
    }
}

fn rating_card(ui: &mut Ui, label: &str, value: u8) {
    Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label).small().color(MUTED));
            ui.label(
                RichText::new(format!("{value}/5"))
                    .size(22.0)
                    .strong()
                    .color(band_color(band(f64::from(value)))),
            );
        });
}

fn text_section(ui: &mut Ui, title: &str, body: &str) {
    card(ui, |ui: &mut Ui| {
        ui.heading(title);
        ui.add_space(6.0);
        ui.label(RichText::new(body).size(15.0));
    });
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .inner_margin(16.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(12.0);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open evaluation export")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.begin_load(path);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::sample_record;

    fn with_selection() -> AppState {
        let mut state = AppState::default();
        state.start_load(PathBuf::from("data.csv"));
        state.load_succeeded(vec![
            sample_record("Anaya", [4; 6]),
            sample_record("Alex Kim", [5, 4, 3, 5, 4, 5]),
        ]);
        state.select(1);
        state
    }

    #[test]
    fn copy_summary_keeps_selection_and_clears_status() {
        let ctx = egui::Context::default();
        let mut state = with_selection();
        state.status_message = Some("stale".to_string());

        handle_detail_action(&ctx, &mut state, DetailAction::CopySummary);

        assert_eq!(state.selection, Some(1));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn copy_summary_without_selection_is_noop() {
        let ctx = egui::Context::default();
        let mut state = with_selection();
        state.clear_selection();
        state.status_message = Some("kept".to_string());

        handle_detail_action(&ctx, &mut state, DetailAction::CopySummary);

        assert_eq!(state.status_message.as_deref(), Some("kept"));
    }

    #[test]
    fn close_clears_selection() {
        let ctx = egui::Context::default();
        let mut state = with_selection();

        handle_detail_action(&ctx, &mut state, DetailAction::None);
        assert_eq!(state.selection, Some(1));

        handle_detail_action(&ctx, &mut state, DetailAction::Close);
        assert!(state.selected().is_none());
        assert_eq!(state.records.len(), 2);
    }
}
