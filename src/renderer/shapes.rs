//! Shape generation for 2D primitives
//!
//! Every builder appends triangle-list vertices to an existing buffer so a
//! whole frame shares one allocation.

use glam::Vec2;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    let top_right = Vec2::new(max.x, min.y);
    let bottom_left = Vec2::new(min.x, max.y);

    out.extend_from_slice(&[
        Vertex::at(min, color),
        Vertex::at(top_right, color),
        Vertex::at(bottom_left, color),
        Vertex::at(bottom_left, color),
        Vertex::at(top_right, color),
        Vertex::at(max, color),
    ]);
}

/// Filled closed polygon as a triangle fan around `pivot`.
///
/// Correct for any outline that is star-shaped with respect to `pivot`
/// (every outline point visible from it).
pub fn fan(out: &mut Vec<Vertex>, pivot: Vec2, outline: &[Vec2], color: [f32; 4]) {
    if outline.len() < 3 {
        return;
    }
    out.reserve(outline.len() * 3);

    for (i, &a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        out.push(Vertex::at(pivot, color));
        out.push(Vertex::at(a, color));
        out.push(Vertex::at(b, color));
    }
}

/// Points along a quadratic Bézier from `from` (exclusive) to `to` (inclusive)
pub fn quadratic(from: Vec2, ctrl: Vec2, to: Vec2, segments: u32) -> impl Iterator<Item = Vec2> {
    let segments = segments.max(1);
    (1..=segments).map(move |i| {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t)
    })
}
