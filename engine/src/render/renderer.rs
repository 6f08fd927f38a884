//! wgpu Renderer
//!
//! Draws a [`FramePlan`] into the window surface. Each command gets its own
//! vertex buffer, uniform buffer and bind group for the frame; scenes are a
//! handful of draws so nothing is pooled.

use std::sync::Arc;

use winit::window::Window;

use super::frame::{FramePlan, Primitive, RenderDriver};
use super::gpu_context::{GpuContext, GpuContextConfig};
use super::pipeline::QuadPipelines;
use super::shader_loader::{ShaderProgram, ShaderSource};
use super::uniforms::DrawUniforms;
use crate::error::Result;

/// GPU resources prepared for a single draw call.
struct PreparedDraw {
    primitive: Primitive,
    vertex_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_count: u32,
}

/// Window renderer backed by wgpu.
pub struct Renderer {
    gpu: GpuContext,
    pipelines: QuadPipelines,
}

impl Renderer {
    /// Create the GPU context and compile the shader program.
    pub fn new(
        window: Arc<Window>,
        config: GpuContextConfig,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<Self> {
        let gpu = GpuContext::new(window, config)?;
        let program = ShaderProgram::load(&gpu.device, vertex, fragment)?;
        let pipelines = QuadPipelines::new(&gpu.device, &program, gpu.format());
        Ok(Self { gpu, pipelines })
    }

    /// Current surface size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.gpu.dimensions()
    }

    fn prepare(&self, plan: &FramePlan) -> Vec<PreparedDraw> {
        let mut draws = Vec::new();
        for batch in &plan.batches {
            let view_proj = batch.view_proj();
            for command in &batch.commands {
                let count = command.drawable_count();
                if count == 0 {
                    continue;
                }

                let vertex_buffer = self
                    .gpu
                    .create_vertex_buffer(command.label, &command.vertices[..count]);
                let uniform_buffer = self
                    .gpu
                    .create_uniform_buffer(command.label, &DrawUniforms::new(view_proj, command.model));
                let bind_group = self.gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(command.label),
                    layout: &self.pipelines.bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

                draws.push(PreparedDraw {
                    primitive: command.primitive,
                    vertex_buffer,
                    bind_group,
                    vertex_count: count as u32,
                });
            }
        }
        draws
    }
}

impl RenderDriver for Renderer {
    fn draw_frame(&mut self, plan: &FramePlan) -> Result<()> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("out of GPU memory, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("surface error: {e:?}");
                return Ok(());
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let draws = self.prepare(plan);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Quad Editor Encoder"),
            });

        {
            let [r, g, b, a] = plan.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Quad Editor Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for draw in &draws {
                render_pass.set_pipeline(self.pipelines.for_primitive(draw.primitive));
                render_pass.set_bind_group(0, &draw.bind_group, &[]);
                render_pass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
                render_pass.draw(0..draw.vertex_count, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}
