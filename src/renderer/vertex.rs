//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors that don't come from entities
pub mod colors {
    use crate::Color;

    pub const NET: Color = Color::WHITE;
    /// What `clear_area` paints on surfaces without real transparency
    pub const BACKGROUND: Color = Color::rgb(0x00, 0x00, 0x00);
}
