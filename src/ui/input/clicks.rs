//! Klick-Events: Punkt setzen (links), letzten Punkt entfernen (rechts).

use super::{screen_pos_to_viewport, InputState};
use crate::app::AppIntent;

impl InputState {
    pub(crate) fn handle_clicks(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::ControlPointPlaced {
                    position: screen_pos_to_viewport(pointer_pos, response),
                });
            }
        } else if response.clicked_by(egui::PointerButton::Secondary) {
            events.push(AppIntent::RemoveLastControlPointRequested);
        }
    }
}
