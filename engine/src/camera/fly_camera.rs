//! Fly Camera Controller Module
//!
//! A free-fly camera driven by mouse-look and WASD. Angles are kept in
//! degrees; the front vector is recomputed whenever they change.
//!
//! Key features:
//! - Mouse delta → yaw/pitch, vertical axis inverted (mouse down looks down)
//! - Pitch clamped to ±89 degrees so the view never flips
//! - Movement scaled by frame time, strafing along front × world up

use glam::{Mat4, Vec3};

use crate::input::MovementKeys;

/// Pitch limit in degrees (either direction)
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;
/// Degrees of rotation per pixel of mouse motion
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Movement speed in world units per second
pub const DEFAULT_MOVE_SPEED: f32 = 10.0;
/// Initial yaw: looking down +Z
pub const DEFAULT_YAW_DEGREES: f32 = 90.0;
/// Initial camera position, above and behind the grid
pub const DEFAULT_POSITION: Vec3 = Vec3::new(5.0, 20.0, -20.0);

/// Spherical-to-Cartesian look direction for the given angles (degrees).
pub fn front_from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_degrees.to_radians(), pitch_degrees.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Free-fly camera.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FlyCamera::new();
///
/// // Pointer motion while captured
/// camera.apply_look(mouse_dx, mouse_dy);
///
/// // Once per frame
/// camera.apply_movement(keys, delta_time);
/// let view = camera.view_matrix();
/// ```
#[derive(Clone, Debug)]
pub struct FlyCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle in degrees, unrestricted
    yaw: f32,
    /// Vertical angle in degrees, clamped to ±PITCH_LIMIT_DEGREES
    pitch: f32,
    /// Normalized look direction derived from yaw/pitch
    front: Vec3,
    /// Degrees per pixel
    pub sensitivity: f32,
    /// World units per second
    pub move_speed: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::with_angles(DEFAULT_POSITION, DEFAULT_YAW_DEGREES, 0.0)
    }
}

impl FlyCamera {
    /// Create a fly camera with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fly camera at a position with the given angles (degrees).
    pub fn with_angles(position: Vec3, yaw_degrees: f32, pitch_degrees: f32) -> Self {
        let pitch = pitch_degrees.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        Self {
            position,
            yaw: yaw_degrees,
            pitch,
            front: front_from_angles(yaw_degrees, pitch),
            sensitivity: DEFAULT_SENSITIVITY,
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }

    /// Current yaw in degrees
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Normalized look direction
    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Normalized strafe direction (front × world up)
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.front.cross(Vec3::Y).normalize()
    }

    /// Apply a pointer motion delta (pixels).
    ///
    /// * `dx` - Positive = mouse moved right = yaw increases
    /// * `dy` - Positive = mouse moved down = pitch decreases
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        self.yaw += dx * self.sensitivity;
        // Window y grows downward
        self.pitch += -dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);

        self.front = front_from_angles(self.yaw, self.pitch);
    }

    /// Move along front/right according to held keys.
    pub fn apply_movement(&mut self, keys: MovementKeys, delta_time: f32) {
        let speed = self.move_speed * delta_time;
        let forward = keys.forward_axis() as f32;
        let strafe = keys.right_axis() as f32;

        if forward != 0.0 {
            self.position += self.front * speed * forward;
        }
        if strafe != 0.0 {
            self.position += self.right() * speed * strafe;
        }
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, Vec3::Y)
    }
}
