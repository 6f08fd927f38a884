//! Quad Editor
//!
//! Place colored vertices on a grid; every four placements close a quad.
//! Click to fly around the result, Escape to go back to editing.
//!
//! Run with: `cargo run --bin quad_editor`
//! Config: `QUAD_EDITOR_CONFIG=editor.json cargo run --bin quad_editor`
//!
//! Default controls:
//! - Arrow keys: Move cursor on Z (up/down) and X (left/right)
//! - K / J: Move cursor up / down
//! - Space: Place vertex
//! - C: Cycle color
//! - Left mouse: Enter camera mode
//! - W/A/S/D + mouse: Fly (camera mode)
//! - ESC: Return to edit mode

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use quad_editor_engine::editor::{EditorConfig, EditorState, ModeChange};
use quad_editor_engine::input::{CursorManager, InputState, KeyCode, MouseButton};
use quad_editor_engine::render::shader_loader::embedded;
use quad_editor_engine::render::{GpuContextConfig, RenderDriver, Renderer, ShaderSource};
use quad_editor_engine::{EngineError, Result};

struct QuadEditorApp {
    config: EditorConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    state: EditorState,
    input: InputState,
    cursor: CursorManager,
    last_frame: Instant,
    /// Startup failure, reported by `main` after the loop exits
    init_error: Option<EngineError>,
}

impl QuadEditorApp {
    fn new(config: EditorConfig) -> Self {
        let state = EditorState::new(&config);
        Self {
            config,
            window: None,
            renderer: None,
            state,
            input: InputState::new(),
            cursor: CursorManager::new_released(),
            last_frame: Instant::now(),
            init_error: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let shaders = &self.config.shaders;
        let vertex = ShaderSource::resolve(shaders.vertex.as_deref(), embedded::QUAD_VERTEX)?;
        let fragment = ShaderSource::resolve(shaders.fragment.as_deref(), embedded::QUAD_FRAGMENT)?;

        let gpu_config = GpuContextConfig {
            vsync: window_config.vsync,
            ..Default::default()
        };
        let renderer = Renderer::new(Arc::clone(&window), gpu_config, &vertex, &fragment)?;

        self.cursor.apply_to_window(&window);
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn apply_mode_change(&mut self, change: ModeChange) {
        match change {
            ModeChange::EnteredCamera => self.cursor.capture(),
            ModeChange::EnteredEdit => self.cursor.release(),
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if let Some(change) = self.state.update(&self.input, delta_time) {
            self.apply_mode_change(change);
        }
        if let Some(window) = &self.window {
            self.cursor.apply_to_window(window);
        }
        self.input.end_frame();

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let (width, height) = renderer.dimensions();
        let plan = self.state.frame_plan(width, height);
        if let Err(err) = renderer.draw_frame(&plan) {
            tracing::error!("frame failed: {err}");
        }
    }
}

impl ApplicationHandler for QuadEditorApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.initialize(event_loop) {
            tracing::error!("startup failed: {err}");
            self.init_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input
                        .handle_key(KeyCode::from_winit(key), event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.input
                    .handle_mouse_button(MouseButton::from_winit(button), state == ElementState::Pressed);
            }

            WindowEvent::Focused(focused) => {
                self.cursor.set_focus(focused);
                if !focused {
                    // Key releases are not delivered while unfocused
                    self.input.reset();
                }
                if let Some(window) = &self.window {
                    self.cursor.apply_to_window(window);
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.handle_mouse_delta(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "quad_editor=info,quad_editor_engine=info,wgpu=warn".into()
            }),
        )
        .init();

    let config = EditorConfig::from_env().inspect_err(|err| tracing::error!("{err}"))?;

    tracing::info!("Quad Editor controls:");
    for line in config.bindings.describe() {
        tracing::info!("  {line}");
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = QuadEditorApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
