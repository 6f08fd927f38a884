//! Quad Editor Engine Library
//!
//! The window-system-agnostic core of the quad editor plus the thin wgpu
//! rendering layer that draws it.
//!
//! # Modules
//!
//! - [`input`] - Key codes, per-frame input state with press edges, pointer capture
//! - [`camera`] - Free-fly camera and projection helpers
//! - [`world`] - Grid configuration and grid line generation
//! - [`render`] - Frame plans, shader loading, and the wgpu render driver
//! - [`editor`] - Vertex assembly, cursor, palette, mode state machine, config
//!
//! # Example
//!
//! ```ignore
//! use quad_editor_engine::editor::{EditorConfig, EditorState};
//! use quad_editor_engine::input::{InputState, KeyCode};
//!
//! let config = EditorConfig::default();
//! let mut state = EditorState::new(&config);
//! let mut input = InputState::new();
//!
//! // Place a vertex at the origin
//! input.handle_key(KeyCode::Space, true);
//! state.update(&input, 1.0 / 60.0);
//! input.end_frame();
//!
//! let plan = state.frame_plan(1366, 768);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod render;
pub mod world;

// Editor-specific modules (located in src/editor/ directory)
#[path = "../../src/editor/mod.rs"]
pub mod editor;

pub use error::{EngineError, Result};
pub use input::{InputState, KeyCode, MouseButton};
pub use render::{DrawBatch, DrawCommand, FramePlan, GpuVertex, Primitive, RenderDriver};
pub use world::GridConfig;
