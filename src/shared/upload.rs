//! Upload-Vertrag zwischen App-Layer und GPU-Renderer.
//!
//! Die App übergibt beide Vertex-Streams komplett; der Empfänger ersetzt
//! den gesamten Buffer-Inhalt (kein inkrementeller Upload).

use crate::core::{ControlPoint, SplineVertex};

/// Fehler beim Hochladen der Vertex-Streams.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Der Renderer ist gerade nicht verfügbar (z.B. vergifteter Mutex)
    #[error("Renderer nicht verfügbar: {0}")]
    RendererUnavailable(String),
    /// Der Stream übersteigt die maximale Buffer-Größe des Devices
    #[error("Buffer '{label}' zu groß: {requested} Bytes (Maximum {max} Bytes)")]
    BufferTooLarge {
        label: &'static str,
        requested: u64,
        max: u64,
    },
}

/// Empfänger für Vertex-Uploads (GPU-Renderer oder Test-Double).
pub trait VertexUpload {
    /// Ersetzt beide GPU-Buffer vollständig durch die übergebenen Streams.
    fn upload(
        &mut self,
        control_points: &[ControlPoint],
        spline: &[SplineVertex],
    ) -> Result<(), UploadError>;
}
