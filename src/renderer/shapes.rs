//! Shape generation for 2D primitives
//!
//! `ShapeBatch` is a `Surface` that tessellates every draw call into a flat
//! triangle list, ready to upload as a vertex buffer. The headless runner
//! renders into it.

use glam::Vec2;
use std::f32::consts::PI;

use super::Surface;
use super::vertex::{Vertex, colors};
use crate::Color;
use crate::consts::NET_DASH;

/// Circle tessellation
const CIRCLE_SEGMENTS: u32 = 24;
/// Stroke width for lines
const LINE_WIDTH: f32 = 1.0;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a dashed line as one thin quad per dash
///
/// `dash` is `[on, off]` in pixels; the pattern starts with a dash at `from`.
pub fn dashed_line(from: Vec2, to: Vec2, width: f32, dash: [f32; 2], color: [f32; 4]) -> Vec<Vertex> {
    let delta = to - from;
    let length = delta.length();
    let period = dash[0] + dash[1];
    if length <= 0.0 || dash[0] <= 0.0 || period <= 0.0 {
        return Vec::new();
    }

    let dir = delta / length;
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let dashes = (length / period).ceil() as usize;
    let mut vertices = Vec::with_capacity(dashes * 6);

    let mut t = 0.0;
    while t < length {
        let end = (t + dash[0]).min(length);
        let a = from + dir * t;
        let b = from + dir * end;

        // Two triangles
        vertices.push(Vertex::new(a.x + perp.x, a.y + perp.y, color));
        vertices.push(Vertex::new(a.x - perp.x, a.y - perp.y, color));
        vertices.push(Vertex::new(b.x + perp.x, b.y + perp.y, color));

        vertices.push(Vertex::new(b.x + perp.x, b.y + perp.y, color));
        vertices.push(Vertex::new(a.x - perp.x, a.y - perp.y, color));
        vertices.push(Vertex::new(b.x - perp.x, b.y - perp.y, color));

        t += period;
    }

    vertices
}

/// A frame's worth of triangles
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    /// Viewport covered by the batch
    size: Vec2,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Surface for ShapeBatch {
    fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32) {
        // A full clear makes everything queued so far invisible
        if x <= 0.0 && y <= 0.0 && x + w >= self.size.x && y + h >= self.size.y {
            self.vertices.clear();
        }
        self.vertices
            .extend(rect(Vec2::new(x, y), Vec2::new(w, h), colors::BACKGROUND.to_rgba()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.vertices
            .extend(rect(Vec2::new(x, y), Vec2::new(w, h), color.to_rgba()));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.vertices
            .extend(circle(Vec2::new(cx, cy), r, color.to_rgba(), CIRCLE_SEGMENTS));
    }

    fn draw_dashed_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.vertices.extend(dashed_line(
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            LINE_WIDTH,
            NET_DASH,
            color.to_rgba(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(15.0, 100.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [25.0, 120.0]));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(400.0, 300.0);
        let verts = circle(center, 8.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 8.0 + 1e-3);
        }
    }

    #[test]
    fn test_dashed_line_dash_count() {
        // 600px with an 8/16 pattern: dashes start at 0, 24, ..., 576
        let verts = dashed_line(
            Vec2::new(400.0, 0.0),
            Vec2::new(400.0, 600.0),
            1.0,
            [8.0, 16.0],
            [1.0; 4],
        );
        assert_eq!(verts.len(), 25 * 6);
        // Every vertex on the line, within half the stroke width
        assert!(verts.iter().all(|v| (v.position[0] - 400.0).abs() <= 0.5));
    }

    #[test]
    fn test_dashed_line_degenerate() {
        let p = Vec2::new(5.0, 5.0);
        assert!(dashed_line(p, p, 1.0, [8.0, 16.0], [1.0; 4]).is_empty());
    }

    #[test]
    fn test_full_clear_drops_queued_shapes() {
        let mut batch = ShapeBatch::new(800.0, 600.0);
        batch.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        batch.fill_circle(50.0, 50.0, 8.0, Color::WHITE);

        batch.clear_area(0.0, 0.0, 800.0, 600.0);
        assert_eq!(batch.vertices().len(), 6);

        // Partial clear keeps what's already there
        batch.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        batch.clear_area(0.0, 0.0, 5.0, 5.0);
        assert_eq!(batch.vertices().len(), 18);
    }

    #[test]
    fn test_as_bytes_len() {
        let mut batch = ShapeBatch::new(800.0, 600.0);
        batch.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(batch.as_bytes().len(), 6 * std::mem::size_of::<Vertex>());
    }
}
