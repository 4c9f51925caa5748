/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick im Viewport (Position in Viewport-Pixeln)
    ControlPointPlaced { position: glam::Vec2 },
    /// Sekundärklick: letzten Kontrollpunkt entfernen
    RemoveLastControlPointRequested,
    /// Qualität (Sample-Dichte) erhöhen
    QualityIncreaseRequested,
    /// Qualität (Sample-Dichte) verringern
    QualityDecreaseRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Ein Frame ist vergangen (Sekunden seit dem letzten Frame)
    FrameAdvanced { dt: f32 },
    /// Anwendung beenden
    ExitRequested,
}
