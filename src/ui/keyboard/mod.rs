//! Keyboard-Shortcuts für den Viewport.
//!
//! Pfeil links/`-` verringert, Pfeil rechts/`+` erhöht die Qualität,
//! Ctrl+Q beendet die Anwendung.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, decrease, increase, quit) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::ArrowRight)
                || i.key_pressed(egui::Key::Plus)
                || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Q),
        )
    });

    if modifiers.command && quit {
        events.push(AppIntent::ExitRequested);
        return events;
    }

    if decrease {
        events.push(AppIntent::QualityDecreaseRequested);
    }
    if increase {
        events.push(AppIntent::QualityIncreaseRequested);
    }

    events
}

#[cfg(test)]
mod tests;
