//! Scene Builder
//!
//! Turns editor state into a [`FramePlan`]: a world batch (grid, placed quads,
//! cursor marker) followed by a pixel-space overlay batch (color swatch).
//! There is no depth test, so later draws paint over earlier ones.

use glam::{Mat4, Vec3};

use super::state::EditorState;
use crate::camera::overlay_projection;
use crate::render::{DrawBatch, DrawCommand, FramePlan, GpuVertex, Primitive};

pub const WORLD_BATCH: &str = "World";
pub const OVERLAY_BATCH: &str = "Overlay";
pub const GRID_DRAW: &str = "Grid";
pub const QUADS_DRAW: &str = "Quads";
pub const CURSOR_DRAW: &str = "Cursor";
pub const SWATCH_DRAW: &str = "Swatch";

/// Swatch center in pixels from the top-left corner.
pub const SWATCH_CENTER: Vec3 = Vec3::new(100.0, 100.0, 0.0);
/// Swatch edge length in pixels.
pub const SWATCH_SIZE: f32 = 100.0;

const CURSOR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Unit quad in the XY plane centered on the origin, as two triangles.
const UNIT_QUAD: [[f32; 3]; 6] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

/// Unit quad vertices in a single color.
pub fn unit_quad(color: [f32; 3]) -> Vec<GpuVertex> {
    UNIT_QUAD
        .iter()
        .map(|&position| GpuVertex::new(position, color))
        .collect()
}

/// Cursor marker transform: lay the quad flat on the XZ plane at the cursor.
pub fn cursor_model(cursor: Vec3) -> Mat4 {
    Mat4::from_translation(cursor)
        * Mat4::from_rotation_x(90f32.to_radians())
        * Mat4::from_scale(Vec3::ONE)
}

pub fn swatch_model() -> Mat4 {
    Mat4::from_translation(SWATCH_CENTER) * Mat4::from_scale(Vec3::splat(SWATCH_SIZE))
}

pub fn build_frame_plan(state: &EditorState, width: u32, height: u32) -> FramePlan {
    let mut plan = FramePlan::new(state.clear_color());

    let camera = state.camera();
    let mut world = DrawBatch::new(
        WORLD_BATCH,
        state.perspective().matrix(width, height),
        camera.view_matrix(),
    );
    let grid = state.grid();
    world.push(DrawCommand::new(
        GRID_DRAW,
        grid.model_matrix(),
        Primitive::LineList,
        grid.line_vertices(),
    ));
    world.push(DrawCommand::new(
        QUADS_DRAW,
        Mat4::IDENTITY,
        Primitive::TriangleList,
        state.vertices().gpu_vertices(),
    ));
    world.push(DrawCommand::new(
        CURSOR_DRAW,
        cursor_model(state.cursor().world_position()),
        Primitive::TriangleList,
        unit_quad(CURSOR_COLOR),
    ));
    plan.batches.push(world);

    let mut overlay = DrawBatch::new(
        OVERLAY_BATCH,
        overlay_projection(width, height),
        Mat4::IDENTITY,
    );
    overlay.push(DrawCommand::new(
        SWATCH_DRAW,
        swatch_model(),
        Primitive::TriangleList,
        unit_quad(state.current_color().to_array()),
    ));
    plan.batches.push(overlay);

    plan
}
