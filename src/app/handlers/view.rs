//! Handler für Viewport und Strich-Animation.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State (wirkt nur auf die Projektion).
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size != size {
        log::debug!("Viewport: {:.0}x{:.0}", size[0], size[1]);
        state.view.viewport_size = size;
    }
}

/// Schiebt die Strichmuster-Phase um `dash_speed · dt` weiter.
///
/// Die Phase bleibt in [0, Periode).
pub fn advance_dash_phase(state: &mut AppState, dt: f32) {
    let period = state.options.dash_period_px;
    if !dt.is_finite() || period <= 0.0 {
        return;
    }
    let phase = state.view.dash_phase + state.options.dash_speed_px_per_s * dt;
    state.view.dash_phase = phase.rem_euclid(period);
}
