//! Handler für Kontrollpunkt- und Qualitäts-Edits.
//!
//! Jeder wirksame Edit tesselliert die Kurve synchron neu.

use crate::app::AppState;
use crate::core::ControlPoint;

/// Hängt einen Kontrollpunkt an und baut die Kurve neu.
pub fn add_control_point(state: &mut AppState, position: glam::Vec2, color: [u8; 4]) {
    state
        .curve
        .points
        .append(ControlPoint::new(position, color));
    log::debug!(
        "Kontrollpunkt {} gesetzt bei ({:.1}, {:.1})",
        state.curve.points.count(),
        position.x,
        position.y
    );
    state.rebuild_curve();
}

/// Entfernt den letzten Kontrollpunkt (No-op bei leerer Kurve).
pub fn remove_last_control_point(state: &mut AppState) {
    if state.curve.points.remove_last().is_some() {
        log::debug!(
            "Letzten Kontrollpunkt entfernt, verbleibend: {}",
            state.curve.points.count()
        );
        state.rebuild_curve();
    } else {
        log::debug!("Entfernen: keine Kontrollpunkte vorhanden");
    }
}

/// Erhöht die Qualität um 1.
pub fn increase_quality(state: &mut AppState) {
    state.curve.quality.increase();
    log::info!("Qualität erhöht auf {}", state.curve.quality);
    state.rebuild_curve();
}

/// Verringert die Qualität um 1, sofern sie über 1 liegt.
pub fn decrease_quality(state: &mut AppState) {
    if state.curve.quality.decrease() {
        log::info!("Qualität verringert auf {}", state.curve.quality);
        state.rebuild_curve();
    } else {
        log::debug!("Qualität bereits minimal ({})", state.curve.quality);
    }
}
