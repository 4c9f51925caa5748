//! Top-Menü (Datei, Kurve).

use crate::app::{AppIntent, AppState};
use crate::core::Quality;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit (Ctrl+Q)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Curve", |ui| {
                if ui.button("Increase Quality (→ / +)").clicked() {
                    events.push(AppIntent::QualityIncreaseRequested);
                    ui.close();
                }

                let can_decrease = state.curve.quality > Quality::MIN;
                if ui
                    .add_enabled(can_decrease, egui::Button::new("Decrease Quality (← / -)"))
                    .clicked()
                {
                    events.push(AppIntent::QualityDecreaseRequested);
                    ui.close();
                }

                ui.separator();

                let has_points = !state.curve.points.is_empty();
                if ui
                    .add_enabled(has_points, egui::Button::new("Remove Last Point (Right Click)"))
                    .clicked()
                {
                    events.push(AppIntent::RemoveLastControlPointRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
