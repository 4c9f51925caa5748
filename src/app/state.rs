//! Application State: zentrale Datenhaltung.

use super::render_sync::RenderSync;
use super::CommandLog;
use crate::core::{sample_count, ControlPointStore, Quality};
use crate::shared::options::MAX_INITIAL_QUALITY;
use crate::shared::EditorOptions;

/// Bearbeitbare Kurve: Kontrollpunkte und Sample-Dichte
#[derive(Debug, Clone, Default)]
pub struct CurveState {
    /// Kontrollpunkte in Einfügereihenfolge
    pub points: ControlPointStore,
    /// Samples pro Kontrollpunkt
    pub quality: Quality,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Phase des animierten Strichmusters in Pixeln, in [0, Periode)
    pub dash_phase: f32,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte + Qualität
    pub curve: CurveState,
    /// Vertex-Streams und Upload-Status
    pub render_sync: RenderSync,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Größen, Strichmuster)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurveState {
                points: ControlPointStore::new(),
                quality: Quality::clamped(options.initial_quality.min(MAX_INITIAL_QUALITY)),
            },
            render_sync: RenderSync::new(),
            view: ViewState::default(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Tesselliert die Kurve neu und markiert die Streams für den Upload.
    pub fn rebuild_curve(&mut self) {
        self.render_sync.rebuild(
            &self.curve.points,
            self.curve.quality,
            self.options.curve_color,
        );
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn control_point_count(&self) -> usize {
        self.curve.points.count()
    }

    /// Erwartete Sample-Anzahl für den aktuellen Zustand
    pub fn sample_count(&self) -> usize {
        sample_count(self.curve.points.count(), self.curve.quality)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
