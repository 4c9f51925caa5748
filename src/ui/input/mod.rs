//! Viewport-Input-Handling: Maus-Events, Resize und Frame-Takt → AppIntent.
//!
//! - `clicks`: Primär-/Sekundärklick auf die Zeichenfläche

mod clicks;

use super::keyboard;
use crate::app::AppIntent;

/// Merkt sich den Viewport-Zustand zwischen Frames.
#[derive(Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge: Resize, Keyboard, Klicks, Frame-Takt.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_clicks(response, &mut events);

        let dt = ui.input(|i| i.stable_dt);
        events.push(AppIntent::FrameAdvanced { dt });

        events
    }
}

/// Rechnet eine Bildschirmposition in Viewport-Pixel um (Ursprung oben links).
pub(crate) fn screen_pos_to_viewport(pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
