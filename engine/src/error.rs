//! Engine Errors
//!
//! Every fallible startup step (window, GPU, shaders, config) reports through
//! [`EngineError`]. The per-frame editor logic has no error paths.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the quad editor.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("failed to read shader `{path}`: {source}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader `{label}` failed to compile: {message}")]
    ShaderCompile { label: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating the editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
