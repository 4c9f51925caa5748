//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{DashStyle, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        viewport_size,
        dash: DashStyle {
            period: state.options.dash_period_px,
            gap: state.options.dash_gap_px,
            phase: state.view.dash_phase,
        },
        point_size_px: state.options.point_size_px,
    }
}
