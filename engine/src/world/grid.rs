//! Grid Configuration Module
//!
//! The reference grid drawn on the XZ plane under the editing cursor.
//!
//! ## Layout
//! Lines are generated in local space from `(0, 0, 0)` to
//! `(size * cell_size, 0, size * cell_size)`; the model matrix shifts them so
//! the grid is centered on the world origin. The cursor itself is not bounded
//! by the grid.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::render::GpuVertex;

/// Grid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells along each side
    pub size: u32,
    /// Edge length of one cell in world units
    pub cell_size: f32,
    /// Line color (RGB)
    pub line_color: [f32; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 30,
            cell_size: 1.0,
            line_color: [0.3, 0.3, 0.3],
        }
    }
}

impl GridConfig {
    /// Total extent of one side in world units.
    pub fn extent(&self) -> f32 {
        self.size as f32 * self.cell_size
    }

    /// Model matrix centering the grid on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        let half = self.extent() / 2.0;
        Mat4::from_translation(-Vec3::new(half, 0.0, half))
    }

    /// Line-list vertices: for each of the `size + 1` divisions, one line along
    /// Z and one along X.
    pub fn line_vertices(&self) -> Vec<GpuVertex> {
        let extent = self.extent();
        let color = self.line_color;
        let mut points = Vec::with_capacity(self.line_vertex_count());

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;
            points.push(GpuVertex::new([offset, 0.0, 0.0], color));
            points.push(GpuVertex::new([offset, 0.0, extent], color));
            points.push(GpuVertex::new([0.0, 0.0, offset], color));
            points.push(GpuVertex::new([extent, 0.0, offset], color));
        }

        points
    }

    /// Number of vertices [`GridConfig::line_vertices`] produces.
    pub fn line_vertex_count(&self) -> usize {
        (self.size as usize + 1) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridConfig::default();
        assert_eq!(grid.size, 30);
        assert_eq!(grid.cell_size, 1.0);
        assert_eq!(grid.extent(), 30.0);
    }

    #[test]
    fn test_line_vertex_count() {
        let grid = GridConfig::default();
        let lines = grid.line_vertices();
        assert_eq!(lines.len(), 124);
        assert_eq!(lines.len(), grid.line_vertex_count());
        assert!(lines.iter().all(|v| v.color == [0.3, 0.3, 0.3]));
        assert!(lines.iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn test_lines_span_extent() {
        let grid = GridConfig {
            size: 2,
            cell_size: 0.5,
            ..Default::default()
        };
        let lines = grid.line_vertices();

        // Last division: line along Z at x = 1.0, then along X at z = 1.0
        let last = &lines[8..12];
        assert_eq!(last[0].position, [1.0, 0.0, 0.0]);
        assert_eq!(last[1].position, [1.0, 0.0, 1.0]);
        assert_eq!(last[2].position, [0.0, 0.0, 1.0]);
        assert_eq!(last[3].position, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_model_matrix_centers_grid() {
        let grid = GridConfig::default();
        let corner = grid.model_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(corner, Vec3::new(-15.0, 0.0, -15.0));

        let far = grid
            .model_matrix()
            .transform_point3(Vec3::new(grid.extent(), 0.0, grid.extent()));
        assert_eq!(far, Vec3::new(15.0, 0.0, 15.0));
    }

    #[test]
    fn test_serde_partial_override() {
        let grid: GridConfig = serde_json::from_str(r#"{ "size": 10 }"#).unwrap();
        assert_eq!(grid.size, 10);
        assert_eq!(grid.cell_size, 1.0);
    }
}
