//! Shader Tests - WGSL Parsing and Validation
//!
//! Compiles the embedded shaders with naga so a broken stage fails in CI
//! instead of at window creation.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use quad_editor_engine::render::ShaderProgram;
use quad_editor_engine::render::shader_loader::embedded;

fn validate(label: &str, source: &str) -> naga::Module {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|err| panic!("{label} failed to parse:\n{}", err.emit_to_string(source)));
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|err| panic!("{label} failed validation: {err:?}"));
    module
}

fn has_entry_point(module: &naga::Module, name: &str, stage: naga::ShaderStage) -> bool {
    module
        .entry_points
        .iter()
        .any(|ep| ep.name == name && ep.stage == stage)
}

#[test]
fn test_vertex_shader_is_valid() {
    let module = validate("quad_vert.wgsl", embedded::QUAD_VERTEX);
    assert!(has_entry_point(
        &module,
        ShaderProgram::VERTEX_ENTRY,
        naga::ShaderStage::Vertex
    ));
}

#[test]
fn test_fragment_shader_is_valid() {
    let module = validate("quad_frag.wgsl", embedded::QUAD_FRAGMENT);
    assert!(has_entry_point(
        &module,
        ShaderProgram::FRAGMENT_ENTRY,
        naga::ShaderStage::Fragment
    ));
}

#[test]
fn test_vertex_uniform_block_size() {
    let module = validate("quad_vert.wgsl", embedded::QUAD_VERTEX);
    let (_, global) = module
        .global_variables
        .iter()
        .find(|(_, var)| var.name.as_deref() == Some("draw"))
        .expect("draw uniform");

    let binding = global.binding.as_ref().expect("draw binding");
    assert_eq!((binding.group, binding.binding), (0, 0));

    let size = module.types[global.ty].inner.size(module.to_ctx());
    assert_eq!(
        size as usize,
        std::mem::size_of::<quad_editor_engine::render::DrawUniforms>()
    );
}

#[test]
fn test_broken_shader_is_rejected() {
    let broken = "@vertex fn vs_main() -> @builtin(position) vec4<f32> { return 1.0; }";
    let parsed = naga::front::wgsl::parse_str(broken);
    let rejected = match parsed {
        Err(_) => true,
        Ok(module) => Validator::new(ValidationFlags::all(), Capabilities::all())
            .validate(&module)
            .is_err(),
    };
    assert!(rejected);
}
