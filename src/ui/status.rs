//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::total_arc_length;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.control_point_count()));
            ui.separator();
            ui.label(format!("Quality: {}", state.curve.quality));
            ui.separator();
            ui.label(format!("Samples: {}", state.sample_count()));
            ui.separator();
            ui.label(format!(
                "Arc Length: {:.1} px",
                total_arc_length(state.render_sync.spline())
            ));

            if state.render_sync.needs_upload() {
                ui.separator();
                ui.label("Upload pending");
            }
        });
    });
}
