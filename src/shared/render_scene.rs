//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Vertex-Daten selbst liegen bereits auf der GPU (edit-getriebener
//! Upload); die Szene trägt nur die per-Frame-Parameter.

/// Parameter des Strichmusters für den Spline-Shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashStyle {
    /// Periode in Pixeln Bogenlänge
    pub period: f32,
    /// Lücke pro Periode in Pixeln
    pub gap: f32,
    /// Aktuelle Phasenverschiebung (Animation), in [0, period)
    pub phase: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Strichmuster der Kurve
    pub dash: DashStyle,
    /// Kantenlänge der Kontrollpunkte in Pixeln
    pub point_size_px: f32,
}

impl RenderScene {
    /// Gibt zurück, ob der Viewport eine darstellbare Fläche hat.
    pub fn has_viewport(&self) -> bool {
        let [w, h] = self.viewport_size;
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}
