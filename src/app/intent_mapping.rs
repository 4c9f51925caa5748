//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ControlPointPlaced { position } => vec![AppCommand::AddControlPoint {
            position,
            color: state.options.control_point_color,
        }],
        AppIntent::RemoveLastControlPointRequested => vec![AppCommand::RemoveLastControlPoint],
        AppIntent::QualityIncreaseRequested => vec![AppCommand::IncreaseQuality],
        AppIntent::QualityDecreaseRequested => vec![AppCommand::DecreaseQuality],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameAdvanced { dt } => {
            if state.options.dash_speed_px_per_s == 0.0 {
                Vec::new()
            } else {
                vec![AppCommand::AdvanceDashPhase { dt }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
