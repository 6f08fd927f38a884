//! Vertex Assembly
//!
//! Placed vertices go into one flat, append-only triangle list. Every fourth
//! placement first re-emits two earlier corners so the last four placements
//! close into a quad drawn as two triangles: `a b c | c a d`.

use glam::Vec3;

use crate::render::GpuVertex;

/// Vertices emitted per closed quad.
pub const VERTICES_PER_QUAD: usize = 6;

/// A placed vertex. Never modified after placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    /// RGB in [0, 1]
    pub color: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    pub fn to_gpu(self) -> GpuVertex {
        GpuVertex::new(self.position.to_array(), self.color.to_array())
    }
}

/// Ordered list of placed vertices plus the closed-quad counter.
#[derive(Debug, Clone, Default)]
pub struct VertexList {
    vertices: Vec<Vertex>,
    quad_count: usize,
}

impl VertexList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, duplicating two earlier corners first when this
    /// placement completes a quad.
    ///
    /// With `idx` the index of the current last vertex, duplication happens
    /// when `(idx + 2 - 2 * quad_count) % 4 == 0`: copies of `list[idx]` and
    /// `list[idx - 2]` are appended, then the new vertex. After `n` placements
    /// the list holds `n + 2 * (n / 4)` vertices.
    pub fn place_vertex(&mut self, position: Vec3, color: Vec3) {
        if let Some(idx) = self.vertices.len().checked_sub(1) {
            // idx + 2 >= 2 * quad_count always holds, and the first trigger is at idx == 2
            if (idx + 2 - self.quad_count * 2) % 4 == 0 {
                let last = self.vertices[idx];
                let two_back = self.vertices[idx - 2];
                self.vertices.push(last);
                self.vertices.push(two_back);
                self.quad_count += 1;
            }
        }
        self.vertices.push(Vertex::new(position, color));
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of quads closed so far.
    pub fn quad_count(&self) -> usize {
        self.quad_count
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Closed quads as 6-vertex groups, in placement order.
    pub fn complete_quads(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(VERTICES_PER_QUAD)
    }

    /// Corners placed toward the next quad, not yet closed.
    pub fn pending_corners(&self) -> &[Vertex] {
        &self.vertices[self.quad_count * VERTICES_PER_QUAD..]
    }

    /// Upload-ready copy of the whole list.
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().map(|v| v.to_gpu()).collect()
    }
}
