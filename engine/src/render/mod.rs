//! Render Module
//!
//! Frame plans and the wgpu renderer that draws them. Editor code only builds
//! [`FramePlan`]s; everything that touches the GPU lives behind [`RenderDriver`].

pub mod frame;
pub mod gpu_context;
pub mod pipeline;
pub mod renderer;
pub mod shader_loader;
pub mod uniforms;
pub mod vertex;

// Re-export commonly used types for convenience
pub use frame::{DrawBatch, DrawCommand, FramePlan, Primitive, RenderDriver};
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use pipeline::QuadPipelines;
pub use renderer::Renderer;
pub use shader_loader::{ShaderProgram, ShaderSource, create_shader_module, load_shader_file};
pub use uniforms::DrawUniforms;
pub use vertex::GpuVertex;
