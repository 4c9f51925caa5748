//! Tessellierte Kurve als gestrichelte dicke Linie.

use super::mesh::build_spline_mesh;
use super::pipeline::{create_pipeline, PipelineDesc, UniformBinding};
use super::types::SplineGpuVertex;
use super::vertex_buffer::DynamicVertexBuffer;
use crate::core::SplineVertex;
use crate::shared::UploadError;

/// Renderer für den Spline-Stream
pub struct SplineRenderer {
    pipeline: wgpu::RenderPipeline,
    vertices: DynamicVertexBuffer,
    scratch: Vec<SplineGpuVertex>,
}

impl SplineRenderer {
    pub fn new(
        render_state: &egui_wgpu::RenderState,
        shader: &wgpu::ShaderModule,
        uniforms: &UniformBinding,
    ) -> Self {
        let pipeline = create_pipeline(
            render_state,
            shader,
            uniforms,
            PipelineDesc {
                label: "Spline Pipeline",
                vs_entry: "vs_spline",
                fs_entry: "fs_spline",
                buffers: &[SplineGpuVertex::desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        Self {
            pipeline,
            vertices: DynamicVertexBuffer::new("Spline Vertex Buffer"),
            scratch: Vec::new(),
        }
    }

    pub fn prepare(&mut self, spline: &[SplineVertex], line_width_px: f32) {
        build_spline_mesh(&mut self.scratch, spline, line_width_px);
    }

    pub fn check_fits(&self, device: &wgpu::Device) -> Result<(), UploadError> {
        self.vertices.check_fits(device, &self.scratch)
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<(), UploadError> {
        self.vertices.replace(device, queue, &self.scratch)
    }

    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>, bind_group: &wgpu::BindGroup) {
        let Some(vertices) = self.vertices.slice() else {
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertices);
        render_pass.draw(0..self.vertices.len(), 0..1);
    }
}
