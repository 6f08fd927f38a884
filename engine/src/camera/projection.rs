//! Projection helpers for the world view and the screen-space overlay.

use glam::Mat4;

/// Near/far range of the pixel-space overlay projection.
pub const OVERLAY_DEPTH_RANGE: (f32, f32) = (-500.0, 500.0);

/// Perspective settings for the world view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane; there is no far plane
    pub near: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
        }
    }
}

impl Perspective {
    /// Infinite perspective matrix for a viewport of the given size.
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        Mat4::perspective_infinite_rh(
            self.fov_y_degrees.to_radians(),
            aspect_ratio(width, height),
            self.near,
        )
    }
}

/// Width over height, guarding against a minimized (zero-height) window.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Orthographic projection in pixel units with the origin at the top-left.
pub fn overlay_projection(width: u32, height: u32) -> Mat4 {
    let (near, far) = OVERLAY_DEPTH_RANGE;
    Mat4::orthographic_rh(0.0, width.max(1) as f32, height.max(1) as f32, 0.0, near, far)
}
