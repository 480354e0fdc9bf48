//! Vertex types for 2D rendering
//!
//! Shapes are built in surface pixels (origin top-left, y down) and mapped
//! to normalized device coordinates just before upload.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and linear color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    /// Map from surface pixels to NDC (-1..1, y up)
    pub fn to_ndc(self, surface: Vec2) -> Self {
        let [x, y] = self.position;
        let w = surface.x.max(1.0);
        let h = surface.y.max(1.0);
        Self::new(x / w * 2.0 - 1.0, 1.0 - y / h * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
