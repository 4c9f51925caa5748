//! GPU-Rendering mit wgpu.

mod callback;
mod control_polygon_renderer;
mod mesh;
mod pipeline;
mod spline_renderer;
mod types;
mod upload;
mod vertex_buffer;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use control_polygon_renderer::ControlPolygonRenderer;
pub(crate) use spline_renderer::SplineRenderer;
pub use types::{PointVertex, SplineGpuVertex, Uniforms};
pub use upload::GpuUpload;

use crate::core::{ControlPoint, SplineVertex};
use crate::shared::UploadError;
use pipeline::UniformBinding;

/// Haupt-Renderer für Kontrollpolygon und Kurve.
///
/// Die Vertex-Buffer werden nur bei Edits ersetzt (`upload_curve()`),
/// `render_scene()` setzt pro Frame nur Uniforms und zeichnet.
pub struct Renderer {
    uniforms: UniformBinding,
    control_polygon_renderer: ControlPolygonRenderer,
    spline_renderer: SplineRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bezier Spline Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        let uniforms = UniformBinding::new(device);
        let control_polygon_renderer = ControlPolygonRenderer::new(render_state, &shader, &uniforms);
        let spline_renderer = SplineRenderer::new(render_state, &shader, &uniforms);

        Self {
            uniforms,
            control_polygon_renderer,
            spline_renderer,
        }
    }

    /// Ersetzt beide Vertex-Buffer vollständig; Linien werden dabei zu
    /// Quads der Breite `line_width_px` erweitert.
    ///
    /// Alle Größen werden vor dem ersten Schreiben geprüft, damit nie nur
    /// ein Stream aktualisiert wird.
    pub fn upload_curve(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        control_points: &[ControlPoint],
        spline: &[SplineVertex],
        line_width_px: f32,
    ) -> Result<(), UploadError> {
        self.control_polygon_renderer
            .prepare(control_points, line_width_px);
        self.spline_renderer.prepare(spline, line_width_px);

        self.control_polygon_renderer.check_fits(device)?;
        self.spline_renderer.check_fits(device)?;

        self.control_polygon_renderer.upload(device, queue)?;
        self.spline_renderer.upload(device, queue)?;

        log::debug!(
            "Vertex-Buffer ersetzt: {} Kontrollpunkte, {} Kurven-Vertices",
            control_points.len(),
            spline.len()
        );
        Ok(())
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        if !scene.has_viewport() {
            return;
        }

        let view_proj = types::build_screen_projection(scene.viewport_size);
        self.uniforms.write(
            queue,
            &Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                dash_params: [scene.dash.period, scene.dash.gap, scene.dash.phase, 0.0],
                point_params: [scene.point_size_px * 0.5, 0.0, 0.0, 0.0],
            },
        );

        // Punkte und Polygon zuerst, Kurve darüber
        self.control_polygon_renderer
            .render(render_pass, &self.uniforms.bind_group);
        self.spline_renderer
            .render(render_pass, &self.uniforms.bind_group);
    }
}
