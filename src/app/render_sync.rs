//! Hält die beiden Vertex-Streams konsistent mit den Kontrollpunkten.
//!
//! Ablauf pro Edit: `rebuild()` tesselliert neu und markiert die Streams als
//! ausstehend; `sync()` übergibt beide Streams vollständig an den Uploader.
//! Gezeichnet wird unabhängig davon in jedem Frame.

use crate::core::{ControlPoint, ControlPointStore, Quality, SplineVertex, Tessellator};
use crate::shared::{UploadError, VertexUpload};

/// Besitzer der Streams „Kontrollpolygon" und „tessellierte Kurve".
#[derive(Debug)]
pub struct RenderSync {
    tessellator: Tessellator,
    control_polyline: Vec<ControlPoint>,
    spline: Vec<SplineVertex>,
    /// Wird bei jedem Rebuild erhöht
    revision: u64,
    /// Zuletzt erfolgreich hochgeladene Revision
    uploaded_revision: Option<u64>,
}

impl Default for RenderSync {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSync {
    /// Erstellt leere Streams, die einmal hochgeladen werden müssen.
    pub fn new() -> Self {
        Self {
            tessellator: Tessellator::new(),
            control_polyline: Vec::new(),
            spline: Vec::new(),
            revision: 0,
            uploaded_revision: None,
        }
    }

    /// Ersetzt beide Streams aus dem aktuellen Kurvenzustand.
    pub fn rebuild(&mut self, store: &ControlPointStore, quality: Quality, curve_color: [u8; 4]) {
        self.control_polyline.clear();
        self.control_polyline.extend_from_slice(store.points());

        self.tessellator
            .rebuild_into(store.points(), quality, curve_color, &mut self.spline);

        self.revision += 1;
        log::debug!(
            "Kurve neu tesselliert: {} Kontrollpunkte, Qualität {}, {} Samples (Rev. {})",
            self.control_polyline.len(),
            quality,
            self.spline.len(),
            self.revision
        );
    }

    /// Übergibt beide Streams vollständig an den Uploader.
    ///
    /// Bei Fehler bleibt der Stand ausstehend und wird beim nächsten Aufruf
    /// erneut versucht.
    pub fn sync(&mut self, uploader: &mut dyn VertexUpload) -> Result<(), UploadError> {
        uploader.upload(&self.control_polyline, &self.spline)?;
        self.uploaded_revision = Some(self.revision);
        Ok(())
    }

    /// Lädt nur hoch, wenn seit dem letzten Upload neu gebaut wurde.
    ///
    /// Gibt zurück, ob ein Upload stattgefunden hat.
    pub fn sync_if_pending(&mut self, uploader: &mut dyn VertexUpload) -> Result<bool, UploadError> {
        if !self.needs_upload() {
            return Ok(false);
        }
        self.sync(uploader)?;
        Ok(true)
    }

    /// Gibt `true` zurück, wenn die GPU-Buffer veraltet sind.
    pub fn needs_upload(&self) -> bool {
        self.uploaded_revision != Some(self.revision)
    }

    /// Read-only Stream der Kontrollpunkte (Kontrollpolygon + Punkte).
    pub fn control_polyline(&self) -> &[ControlPoint] {
        &self.control_polyline
    }

    /// Read-only Stream der tessellierten Kurve.
    pub fn spline(&self) -> &[SplineVertex] {
        &self.spline
    }

    /// Aktuelle Rebuild-Revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingUpload {
        calls: Vec<(usize, usize)>,
        fail: bool,
    }

    impl VertexUpload for RecordingUpload {
        fn upload(
            &mut self,
            control_points: &[ControlPoint],
            spline: &[SplineVertex],
        ) -> Result<(), UploadError> {
            if self.fail {
                return Err(UploadError::RendererUnavailable("Test".into()));
            }
            self.calls.push((control_points.len(), spline.len()));
            Ok(())
        }
    }

    fn store_with(points: &[(f32, f32)]) -> ControlPointStore {
        let mut store = ControlPointStore::new();
        for &(x, y) in points {
            store.append(ControlPoint::new(Vec2::new(x, y), [255; 4]));
        }
        store
    }

    #[test]
    fn fresh_sync_is_pending() {
        let sync = RenderSync::new();
        assert!(sync.needs_upload());
        assert!(sync.spline().is_empty());
    }

    #[test]
    fn rebuild_then_sync_uploads_current_streams() {
        let mut sync = RenderSync::new();
        let mut upload = RecordingUpload::default();
        let store = store_with(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

        sync.rebuild(&store, Quality::clamped(2), [1, 2, 3, 4]);
        assert!(sync.needs_upload());
        assert!(sync.sync_if_pending(&mut upload).expect("Upload ok"));

        assert_eq!(upload.calls, vec![(3, 6)]);
        assert!(!sync.needs_upload());
        assert!(!sync.sync_if_pending(&mut upload).expect("Upload ok"));
        assert_eq!(upload.calls.len(), 1);
    }

    #[test]
    fn failed_upload_stays_pending() {
        let mut sync = RenderSync::new();
        let mut upload = RecordingUpload {
            fail: true,
            ..Default::default()
        };
        let store = store_with(&[(0.0, 0.0), (5.0, 5.0)]);

        sync.rebuild(&store, Quality::MIN, [255; 4]);
        assert!(sync.sync(&mut upload).is_err());
        assert!(sync.needs_upload());
        assert_eq!(store.count(), 2);

        upload.fail = false;
        sync.sync(&mut upload).expect("zweiter Versuch");
        assert!(!sync.needs_upload());
        assert_eq!(upload.calls, vec![(2, 2)]);
    }
}
