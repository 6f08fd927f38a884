//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! Window events are converted into generic codes once, at the edge, and
//! folded into [`InputState`], which the editor reads once per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use quad_editor_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//!
//! input.handle_key(KeyCode::Space, true);
//! assert!(input.key_just_pressed(KeyCode::Space));
//!
//! input.handle_mouse_button(MouseButton::Left, true);
//! assert!(input.mouse_active(MouseButton::Left));
//!
//! // After the frame has been processed
//! input.end_frame();
//! ```

pub mod cursor_manager;
pub mod handler;
pub mod keyboard;
pub mod mouse;
pub mod mouse_state;

// Re-export commonly used types at module level
pub use cursor_manager::CursorManager;
pub use handler::{InputState, KeyState};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse::MouseButton;
pub use mouse_state::FpsMouseState;
