//! Camera Module
//!
//! Provides the free-fly camera and projection helpers.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod fly_camera;
pub mod projection;

pub use fly_camera::{
    DEFAULT_MOVE_SPEED, DEFAULT_POSITION, DEFAULT_SENSITIVITY, DEFAULT_YAW_DEGREES, FlyCamera,
    PITCH_LIMIT_DEGREES, front_from_angles,
};
pub use projection::{Perspective, aspect_ratio, overlay_projection};
