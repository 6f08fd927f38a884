//! Frame Plan
//!
//! A renderer-agnostic description of one frame: batches of draw commands,
//! each batch sharing a projection and view. The editor builds a plan from its
//! state; a [`RenderDriver`] turns it into GPU work. Nothing here touches wgpu.

use glam::Mat4;

use super::vertex::GpuVertex;
use crate::error::Result;

/// How a command's vertex list is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Every two vertices form a line segment
    LineList,
    /// Every three vertices form a triangle
    TriangleList,
}

impl Primitive {
    /// Vertices consumed per primitive.
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Primitive::LineList => 2,
            Primitive::TriangleList => 3,
        }
    }

    /// Largest drawable vertex count not exceeding `count`.
    ///
    /// Trailing vertices of an incomplete primitive are dropped.
    pub fn drawable_count(self, count: usize) -> usize {
        count - count % self.vertices_per_primitive()
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Debug label used for GPU object names
    pub label: &'static str,
    pub model: Mat4,
    pub primitive: Primitive,
    pub vertices: Vec<GpuVertex>,
}

impl DrawCommand {
    pub fn new(
        label: &'static str,
        model: Mat4,
        primitive: Primitive,
        vertices: Vec<GpuVertex>,
    ) -> Self {
        Self {
            label,
            model,
            primitive,
            vertices,
        }
    }

    /// Number of vertices the driver will actually draw.
    pub fn drawable_count(&self) -> usize {
        self.primitive.drawable_count(self.vertices.len())
    }
}

/// Draw commands sharing one projection and view.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub label: &'static str,
    pub projection: Mat4,
    pub view: Mat4,
    pub commands: Vec<DrawCommand>,
}

impl DrawBatch {
    pub fn new(label: &'static str, projection: Mat4, view: Mat4) -> Self {
        Self {
            label,
            projection,
            view,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Everything drawn in one frame, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Background color (RGBA)
    pub clear_color: [f64; 4],
    pub batches: Vec<DrawBatch>,
}

impl FramePlan {
    pub fn new(clear_color: [f64; 4]) -> Self {
        Self {
            clear_color,
            batches: Vec::new(),
        }
    }

    /// Iterate every command in draw order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.batches.iter().flat_map(|batch| batch.commands.iter())
    }

    /// Find a command by label.
    pub fn command(&self, label: &str) -> Option<&DrawCommand> {
        self.commands().find(|command| command.label == label)
    }
}

/// Consumer of frame plans. The wgpu implementation is [`super::Renderer`].
pub trait RenderDriver {
    /// Draw one frame. Implementations must not retain the plan.
    fn draw_frame(&mut self, plan: &FramePlan) -> Result<()>;

    /// Handle a window resize.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex() -> GpuVertex {
        GpuVertex::new([0.0; 3], [1.0; 3])
    }

    #[test]
    fn test_drawable_count_truncates_partial_primitives() {
        assert_eq!(Primitive::TriangleList.drawable_count(7), 6);
        assert_eq!(Primitive::TriangleList.drawable_count(2), 0);
        assert_eq!(Primitive::LineList.drawable_count(5), 4);
        assert_eq!(Primitive::LineList.drawable_count(124), 124);
    }

    #[test]
    fn test_command_lookup_in_draw_order() {
        let mut world = DrawBatch::new("World", Mat4::IDENTITY, Mat4::IDENTITY);
        world.push(DrawCommand::new(
            "Grid",
            Mat4::IDENTITY,
            Primitive::LineList,
            vec![vertex(); 2],
        ));
        let mut overlay = DrawBatch::new("Overlay", Mat4::IDENTITY, Mat4::IDENTITY);
        overlay.push(DrawCommand::new(
            "Swatch",
            Mat4::IDENTITY,
            Primitive::TriangleList,
            vec![vertex(); 6],
        ));

        let mut plan = FramePlan::new([0.0, 0.0, 0.4, 1.0]);
        plan.batches.push(world);
        plan.batches.push(overlay);

        let labels: Vec<_> = plan.commands().map(|c| c.label).collect();
        assert_eq!(labels, ["Grid", "Swatch"]);
        assert_eq!(plan.command("Swatch").map(|c| c.vertices.len()), Some(6));
        assert!(plan.command("Missing").is_none());
    }

    #[test]
    fn test_view_proj_order() {
        let projection = Mat4::from_scale(glam::Vec3::splat(2.0));
        let view = Mat4::from_translation(glam::Vec3::X);
        let batch = DrawBatch::new("World", projection, view);
        let p = batch.view_proj().transform_point3(glam::Vec3::ZERO);
        // translate first, then scale
        assert_eq!(p, glam::Vec3::new(2.0, 0.0, 0.0));
    }
}
