//! Shader Loading Utilities
//!
//! Loads the vertex and fragment stages of a shader program, either embedded
//! at compile time or read from disk, and compiles them with validation.
//! A stage that fails to compile is a startup error, never a silent blank frame.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Shader source that can be either embedded at compile time or loaded at runtime.
#[derive(Debug, Clone)]
pub enum ShaderSource {
    /// Embedded shader source (no file I/O at runtime)
    Embedded(&'static str),
    /// Runtime-loaded shader source
    Runtime(String),
}

impl ShaderSource {
    /// Get the shader source as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShaderSource::Embedded(s) => s,
            ShaderSource::Runtime(s) => s.as_str(),
        }
    }

    /// Read `path` when given, otherwise fall back to the embedded source.
    pub fn resolve(path: Option<&Path>, embedded: &'static str) -> Result<Self> {
        match path {
            Some(path) => load_shader_file(path),
            None => Ok(ShaderSource::Embedded(embedded)),
        }
    }
}

/// Load a shader from the filesystem at runtime.
pub fn load_shader_file(path: impl AsRef<Path>) -> Result<ShaderSource> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| EngineError::ShaderRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("loaded shader {}", path.display());
    Ok(ShaderSource::Runtime(source))
}

/// Create a wgpu shader module, surfacing WGSL errors instead of panicking.
pub fn create_shader_module(
    device: &wgpu::Device,
    label: &str,
    source: &ShaderSource,
) -> Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source.as_str())),
    });

    match pollster::block_on(device.pop_error_scope()) {
        None => Ok(module),
        Some(err) => {
            tracing::error!("shader `{label}` failed to compile:\n{err}");
            Err(EngineError::ShaderCompile {
                label: label.to_string(),
                message: err.to_string(),
            })
        }
    }
}

/// Compiled vertex + fragment stages.
///
/// Entry points are `vs_main` and `fs_main`. The vertex stage reads
/// `DrawUniforms { view_proj, model }` from group 0, binding 0.
#[derive(Debug)]
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    pub const VERTEX_ENTRY: &'static str = "vs_main";
    pub const FRAGMENT_ENTRY: &'static str = "fs_main";

    /// Compile both stages; fails on the first stage that does not compile.
    pub fn load(
        device: &wgpu::Device,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<Self> {
        Ok(Self {
            vertex: create_shader_module(device, "Quad Vertex Shader", vertex)?,
            fragment: create_shader_module(device, "Quad Fragment Shader", fragment)?,
        })
    }
}

/// Shader paths relative to the repository root.
pub mod paths {
    /// Vertex stage: transforms by `view_proj * model`, passes color through
    pub const QUAD_VERTEX: &str = "shaders/quad_vert.wgsl";

    /// Fragment stage: flat vertex color
    pub const QUAD_FRAGMENT: &str = "shaders/quad_frag.wgsl";
}

/// Embedded shaders that are compiled into the binary.
pub mod embedded {
    pub const QUAD_VERTEX: &str = include_str!("../../../shaders/quad_vert.wgsl");
    pub const QUAD_FRAGMENT: &str = include_str!("../../../shaders/quad_frag.wgsl");
}
