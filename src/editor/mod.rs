//! Editor Module
//!
//! The quad editor itself: vertex assembly, grid cursor, color palette, the
//! Edit/Camera mode machine, configuration, and the frame update that ties
//! them together. Window handling lives in the binary.

pub mod bindings;
pub mod config;
pub mod cursor;
pub mod mode;
pub mod palette;
pub mod scene;
pub mod state;
pub mod vertex_list;

pub use bindings::{CursorBindings, EditorBindings, FlyBindings};
pub use config::{CONFIG_ENV, CameraConfig, EditorConfig, ShaderConfig, WindowConfig};
pub use cursor::{CursorStep, GridCursor};
pub use mode::{EditorMode, ModeChange, ModeTriggers};
pub use palette::{ColorPalette, DEFAULT_COLORS};
pub use state::EditorState;
pub use vertex_list::{VERTICES_PER_QUAD, Vertex, VertexList};
