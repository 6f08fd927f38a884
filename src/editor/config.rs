//! Editor Configuration
//!
//! Window, camera, grid, palette, key map and shader paths. Every field has a
//! built-in default; a JSON file only needs the fields it changes.
//!
//! ```json
//! { "window": { "vsync": false }, "palette": [[1, 1, 0], [0, 1, 1]] }
//! ```

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bindings::EditorBindings;
use super::palette::DEFAULT_COLORS;
use crate::camera::{
    DEFAULT_MOVE_SPEED, DEFAULT_POSITION, DEFAULT_SENSITIVITY, DEFAULT_YAW_DEGREES, FlyCamera,
    Perspective,
};
use crate::error::ConfigError;
use crate::world::GridConfig;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV: &str = "QUAD_EDITOR_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Background color (RGBA)
    pub clear_color: [f64; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Quad Editor".to_string(),
            width: 1366,
            height: 768,
            vsync: true,
            clear_color: [0.0, 0.0, 0.4, 1.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    /// Degrees per pixel of pointer motion
    pub sensitivity: f32,
    /// World units per second
    pub move_speed: f32,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub near: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let perspective = Perspective::default();
        Self {
            position: DEFAULT_POSITION.to_array(),
            yaw: DEFAULT_YAW_DEGREES,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            move_speed: DEFAULT_MOVE_SPEED,
            fov_y: perspective.fov_y_degrees,
            near: perspective.near,
        }
    }
}

impl CameraConfig {
    pub fn fly_camera(&self) -> FlyCamera {
        let mut camera = FlyCamera::with_angles(Vec3::from_array(self.position), self.yaw, self.pitch);
        camera.sensitivity = self.sensitivity;
        camera.move_speed = self.move_speed;
        camera
    }

    pub fn perspective(&self) -> Perspective {
        Perspective {
            fov_y_degrees: self.fov_y,
            near: self.near,
        }
    }
}

/// Shader stage files; the embedded sources are used when unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub grid: GridConfig,
    /// Placement colors (RGB)
    pub palette: Vec<[f32; 3]>,
    pub bindings: EditorBindings,
    pub shaders: ShaderConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            grid: GridConfig::default(),
            palette: DEFAULT_COLORS.to_vec(),
            bindings: EditorBindings::default(),
            shaders: ShaderConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV`], or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path_str = std::env::var(CONFIG_ENV).unwrap_or_default();
        if path_str.is_empty() {
            tracing::info!("{CONFIG_ENV} not set, using default config");
            return Ok(Self::default());
        }
        tracing::info!("loading config from {path_str}");
        Self::load(path_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(
                "window",
                format!("size must be positive, got {}x{}", self.window.width, self.window.height),
            ));
        }
        if self.window.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(invalid(
                "window.clear_color",
                format!("components must be in [0, 1], got {:?}", self.window.clear_color),
            ));
        }
        positive("camera.sensitivity", self.camera.sensitivity)?;
        positive("camera.move_speed", self.camera.move_speed)?;
        positive("camera.near", self.camera.near)?;
        if !(self.camera.fov_y > 0.0 && self.camera.fov_y < 180.0) {
            return Err(invalid(
                "camera.fov_y",
                format!("must be in (0, 180), got {}", self.camera.fov_y),
            ));
        }
        if self.grid.size == 0 {
            return Err(invalid("grid.size", "must be at least 1".to_string()));
        }
        positive("grid.cell_size", self.grid.cell_size)?;
        unit_color("grid.line_color", &self.grid.line_color)?;
        if self.palette.is_empty() {
            return Err(invalid("palette", "needs at least one color".to_string()));
        }
        for color in &self.palette {
            unit_color("palette", color)?;
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Also rejects NaN
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn unit_color(field: &'static str, color: &[f32; 3]) -> Result<(), ConfigError> {
    if color.iter().all(|c| (0.0..=1.0).contains(c)) {
        Ok(())
    } else {
        Err(invalid(field, format!("components must be in [0, 1], got {color:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    fn invalid_field(json: &str) -> &'static str {
        match EditorConfig::from_json_str(json) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.window.width, 1366);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.window.clear_color, [0.0, 0.0, 0.4, 1.0]);
        assert_eq!(config.camera.position, [5.0, 20.0, -20.0]);
        assert_eq!(config.camera.yaw, 90.0);
        assert_eq!(config.grid.size, 30);
        assert_eq!(config.palette.len(), 5);
        assert!(config.shaders.vertex.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EditorConfig::from_json_str("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EditorConfig::from_json_str(
            r#"{
                "window": { "vsync": false },
                "camera": { "move_speed": 25.0 },
                "grid": { "size": 10 },
                "palette": [[1.0, 1.0, 0.0]],
                "bindings": { "exit_camera": "Q" },
                "shaders": { "vertex": "custom.wgsl" }
            }"#,
        )
        .unwrap();
        assert!(!config.window.vsync);
        assert_eq!(config.window.width, 1366);
        assert_eq!(config.camera.move_speed, 25.0);
        assert_eq!(config.camera.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.grid.size, 10);
        assert_eq!(config.grid.cell_size, 1.0);
        assert_eq!(config.palette, vec![[1.0, 1.0, 0.0]]);
        assert_eq!(config.bindings.exit_camera, KeyCode::Q);
        assert_eq!(config.shaders.vertex, Some(PathBuf::from("custom.wgsl")));
        assert!(config.shaders.fragment.is_none());
    }

    #[test]
    fn test_validation_failures() {
        assert_eq!(invalid_field(r#"{ "palette": [] }"#), "palette");
        assert_eq!(invalid_field(r#"{ "palette": [[2.0, 0.0, 0.0]] }"#), "palette");
        assert_eq!(invalid_field(r#"{ "grid": { "size": 0 } }"#), "grid.size");
        assert_eq!(
            invalid_field(r#"{ "camera": { "move_speed": 0.0 } }"#),
            "camera.move_speed"
        );
        assert_eq!(
            invalid_field(r#"{ "camera": { "sensitivity": -0.1 } }"#),
            "camera.sensitivity"
        );
        assert_eq!(invalid_field(r#"{ "window": { "height": 0 } }"#), "window");
        assert_eq!(invalid_field(r#"{ "camera": { "fov_y": 180.0 } }"#), "camera.fov_y");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EditorConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EditorConfig::load("no/such/config.json"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_camera_from_config() {
        let config = CameraConfig {
            sensitivity: 0.5,
            ..CameraConfig::default()
        };
        let camera = config.fly_camera();
        assert_eq!(camera.position, Vec3::new(5.0, 20.0, -20.0));
        assert_eq!(camera.yaw(), 90.0);
        assert_eq!(camera.sensitivity, 0.5);
        assert_eq!(config.perspective(), Perspective::default());
    }
}
