//! Render Pipeline Module
//!
//! One pipeline per primitive topology, sharing a shader program and a
//! per-draw uniform bind group layout. No depth test: draws land in plan order.

use super::frame::Primitive;
use super::shader_loader::ShaderProgram;
use super::uniforms::DrawUniforms;
use super::vertex::GpuVertex;

/// Pipelines for line-list and triangle-list draws.
pub struct QuadPipelines {
    pub bind_group_layout: wgpu::BindGroupLayout,
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
}

impl QuadPipelines {
    pub fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        format: wgpu::TextureFormat,
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Draw Uniforms Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<DrawUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_pipeline = Self::create_pipeline(
            device,
            &layout,
            program,
            format,
            "Grid Line Pipeline",
            wgpu::PrimitiveTopology::LineList,
        );
        let triangle_pipeline = Self::create_pipeline(
            device,
            &layout,
            program,
            format,
            "Triangle Pipeline",
            wgpu::PrimitiveTopology::TriangleList,
        );

        Self {
            bind_group_layout,
            line_pipeline,
            triangle_pipeline,
        }
    }

    /// Pipeline for the given primitive mode.
    pub fn for_primitive(&self, primitive: Primitive) -> &wgpu::RenderPipeline {
        match primitive {
            Primitive::LineList => &self.line_pipeline,
            Primitive::TriangleList => &self.triangle_pipeline,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        program: &ShaderProgram,
        format: wgpu::TextureFormat,
        label: &str,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &program.vertex,
                entry_point: Some(ShaderProgram::VERTEX_ENTRY),
                buffers: &[GpuVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &program.fragment,
                entry_point: Some(ShaderProgram::FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // Quads are visible from both sides
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}
