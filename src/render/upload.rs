//! Brücke von `VertexUpload` zum geteilten GPU-Renderer.

use super::Renderer;
use crate::core::{ControlPoint, SplineVertex};
use crate::shared::{UploadError, VertexUpload};
use std::sync::Mutex;

/// Uploader, der die Streams in die Buffer des Renderers schreibt.
pub struct GpuUpload<'a> {
    pub renderer: &'a Mutex<Renderer>,
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Breite von Polygon und Kurve in Pixeln
    pub line_width_px: f32,
}

impl VertexUpload for GpuUpload<'_> {
    fn upload(
        &mut self,
        control_points: &[ControlPoint],
        spline: &[SplineVertex],
    ) -> Result<(), UploadError> {
        let mut renderer = self
            .renderer
            .lock()
            .map_err(|e| UploadError::RendererUnavailable(e.to_string()))?;
        renderer.upload_curve(
            self.device,
            self.queue,
            control_points,
            spline,
            self.line_width_px,
        )
    }
}
