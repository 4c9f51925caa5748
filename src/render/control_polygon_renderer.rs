//! Kontrollpolygon (dicke Linie) und Kontrollpunkte (instanzierte Quads).

use super::mesh::build_polygon_mesh;
use super::pipeline::{create_pipeline, PipelineDesc, UniformBinding};
use super::types::{CornerVertex, PointVertex};
use super::vertex_buffer::DynamicVertexBuffer;
use crate::core::ControlPoint;
use crate::shared::UploadError;
use wgpu::util::DeviceExt;

/// Zeichnet das Kontrollpolygon und die Punkte darauf.
pub struct ControlPolygonRenderer {
    polygon_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    polygon: DynamicVertexBuffer,
    points: DynamicVertexBuffer,
    /// Wiederverwendbare Scratch-Buffer für die GPU-Konvertierung
    polygon_scratch: Vec<PointVertex>,
    point_scratch: Vec<PointVertex>,
}

impl ControlPolygonRenderer {
    pub fn new(
        render_state: &egui_wgpu::RenderState,
        shader: &wgpu::ShaderModule,
        uniforms: &UniformBinding,
    ) -> Self {
        let polygon_pipeline = create_pipeline(
            render_state,
            shader,
            uniforms,
            PipelineDesc {
                label: "Control Polygon Pipeline",
                vs_entry: "vs_polygon",
                fs_entry: "fs_color",
                buffers: &[PointVertex::desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        let point_pipeline = create_pipeline(
            render_state,
            shader,
            uniforms,
            PipelineDesc {
                label: "Control Point Pipeline",
                vs_entry: "vs_point",
                fs_entry: "fs_color",
                buffers: &[CornerVertex::desc(), PointVertex::instance_desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        let quad_buffer =
            render_state
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Control Point Quad"),
                    contents: bytemuck::cast_slice(&CornerVertex::QUAD),
                    usage: wgpu::BufferUsages::VERTEX,
                });

        Self {
            polygon_pipeline,
            point_pipeline,
            quad_buffer,
            polygon: DynamicVertexBuffer::new("Control Polygon Buffer"),
            points: DynamicVertexBuffer::new("Control Point Buffer"),
            polygon_scratch: Vec::new(),
            point_scratch: Vec::new(),
        }
    }

    /// Baut Polygon-Mesh und Punkt-Instanzen in den Scratch-Buffern auf.
    pub fn prepare(&mut self, control_points: &[ControlPoint], line_width_px: f32) {
        build_polygon_mesh(&mut self.polygon_scratch, control_points, line_width_px);

        self.point_scratch.clear();
        self.point_scratch
            .extend(control_points.iter().map(PointVertex::from));
    }

    /// Prüft, ob die vorbereiteten Streams hochgeladen werden können.
    pub fn check_fits(&self, device: &wgpu::Device) -> Result<(), UploadError> {
        self.polygon.check_fits(device, &self.polygon_scratch)?;
        self.points.check_fits(device, &self.point_scratch)
    }

    /// Ersetzt die GPU-Buffer durch die vorbereiteten Streams.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<(), UploadError> {
        self.polygon.replace(device, queue, &self.polygon_scratch)?;
        self.points.replace(device, queue, &self.point_scratch)
    }

    /// Zeichnet Polygon und Punkte (Punkte über dem Polygon).
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>, bind_group: &wgpu::BindGroup) {
        render_pass.set_bind_group(0, bind_group, &[]);

        if let Some(polygon) = self.polygon.slice() {
            render_pass.set_pipeline(&self.polygon_pipeline);
            render_pass.set_vertex_buffer(0, polygon);
            render_pass.draw(0..self.polygon.len(), 0..1);
        }

        if let Some(points) = self.points.slice() {
            render_pass.set_pipeline(&self.point_pipeline);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, points);
            render_pass.draw(0..CornerVertex::QUAD.len() as u32, 0..self.points.len());
        }
    }
}
