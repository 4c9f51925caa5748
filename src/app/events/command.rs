/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt ans Ende anhängen
    AddControlPoint {
        position: glam::Vec2,
        color: [u8; 4],
    },
    /// Letzten Kontrollpunkt entfernen (No-op bei leerer Kurve)
    RemoveLastControlPoint,
    /// Qualität um 1 erhöhen
    IncreaseQuality,
    /// Qualität um 1 verringern (nicht unter 1)
    DecreaseQuality,
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Phase des Strichmusters weiterschieben
    AdvanceDashPhase { dt: f32 },
    /// Anwendung beenden
    RequestExit,
}
