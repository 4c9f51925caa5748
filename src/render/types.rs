//! Rendering-Typen: GPU-Vertex-Layouts, Uniforms, Projektion.

use crate::core::{ControlPoint, SplineVertex};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Eckpunkt des Einheits-Quads für instanzierte Kontrollpunkte
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CornerVertex {
    /// Ecke in [-1, 1]²
    pub corner: [f32; 2],
}

impl CornerVertex {
    /// Zwei Dreiecke, die das Quad [-1, 1]² abdecken.
    pub const QUAD: [CornerVertex; 6] = [
        CornerVertex { corner: [-1.0, -1.0] },
        CornerVertex { corner: [1.0, -1.0] },
        CornerVertex { corner: [1.0, 1.0] },
        CornerVertex { corner: [-1.0, -1.0] },
        CornerVertex { corner: [1.0, 1.0] },
        CornerVertex { corner: [-1.0, 1.0] },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CornerVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// GPU-Vertex eines Kontrollpunkts (Kontrollpolygon und Punkt-Instanzen).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// Position in Viewport-Pixeln
    pub position: [f32; 2],
    /// RGBA-Farbe (normalisiert im Shader)
    pub color: [u8; 4],
}

const POINT_ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
        shader_location: 1,
        format: wgpu::VertexFormat::Unorm8x4,
    },
];

const POINT_INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
        shader_location: 2,
        format: wgpu::VertexFormat::Unorm8x4,
    },
];

impl PointVertex {
    /// Layout als Vertex-Stream (Dreiecke des Kontrollpolygons).
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POINT_ATTRIBUTES,
        }
    }

    /// Layout als Instanz-Stream (ein Quad pro Kontrollpunkt).
    pub const fn instance_desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POINT_INSTANCE_ATTRIBUTES,
        }
    }
}

impl From<&ControlPoint> for PointVertex {
    fn from(point: &ControlPoint) -> Self {
        Self {
            position: point.position.to_array(),
            color: point.color,
        }
    }
}

/// GPU-Vertex der tessellierten Kurve inkl. Bogenlänge.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SplineGpuVertex {
    /// Position in Viewport-Pixeln
    pub position: [f32; 2],
    /// RGBA-Farbe (normalisiert im Shader)
    pub color: [u8; 4],
    /// Kumulierte Bogenlänge in Pixeln
    pub arc_length: f32,
}

impl SplineGpuVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SplineGpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
                wgpu::VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 2]>() + std::mem::size_of::<[u8; 4]>())
                        as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

impl From<&SplineVertex> for SplineGpuVertex {
    fn from(vertex: &SplineVertex) -> Self {
        Self {
            position: vertex.position.to_array(),
            color: vertex.color,
            arc_length: vertex.arc_length,
        }
    }
}

/// Uniform-Buffer, gemeinsam für beide Pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Projektion Viewport-Pixel → Clip-Space (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// x = Periode, y = Lücke, z = Phase, w = ungenutzt
    pub dash_params: [f32; 4],
    /// x = halbe Punktgröße in Pixeln
    pub point_params: [f32; 4],
}

/// Orthographische Projektion für Viewport-Pixel (Ursprung oben links, y nach unten).
pub(crate) fn build_screen_projection(viewport_size: [f32; 2]) -> Mat4 {
    let [width, height] = viewport_size;
    Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::{Vec2, Vec4};

    #[test]
    fn gpu_records_have_expected_sizes() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 12);
        assert_eq!(std::mem::size_of::<SplineGpuVertex>(), 16);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn projection_maps_viewport_corners_to_clip_space() {
        let proj = build_screen_projection([800.0, 600.0]);

        let top_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(top_left.y, 1.0, epsilon = 1e-5);

        let bottom_right = proj * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert_abs_diff_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(bottom_right.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn conversion_keeps_arc_length() {
        let vertex = SplineVertex {
            position: Vec2::new(3.0, 4.0),
            color: [1, 2, 3, 4],
            arc_length: 12.5,
        };
        let gpu = SplineGpuVertex::from(&vertex);
        assert_eq!(gpu.position, [3.0, 4.0]);
        assert_eq!(gpu.color, [1, 2, 3, 4]);
        assert_eq!(gpu.arc_length, 12.5);
    }
}
