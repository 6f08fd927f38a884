//! Uniform Structs for GPU Shaders
//!
//! Must match the WGSL `DrawUniforms` layout in `quad_vert.wgsl` exactly.
//!
//! Layout (128 bytes):
//!   offset  0: view_proj (mat4x4<f32>) = 64 bytes
//!   offset 64: model (mat4x4<f32>)     = 64 bytes

use glam::Mat4;

/// Per-draw uniforms: the batch's view-projection and the command's model matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(DrawUniforms, [u8; 128]);

impl DrawUniforms {
    pub fn new(view_proj: Mat4, model: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

impl Default for DrawUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_column_major_translation() {
        let uniforms = DrawUniforms::new(
            Mat4::IDENTITY,
            Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
        );
        // Translation lives in the fourth column
        assert_eq!(uniforms.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniforms.view_proj, Mat4::IDENTITY.to_cols_array_2d());
    }
}
