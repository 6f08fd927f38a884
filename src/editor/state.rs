//! Editor State
//!
//! Owns everything the editor mutates and runs the per-frame update. Knows
//! nothing about windows or GPUs: it reads an [`InputState`] and produces a
//! [`FramePlan`] on request.

use glam::Vec3;

use super::bindings::EditorBindings;
use super::config::EditorConfig;
use super::cursor::GridCursor;
use super::mode::{EditorMode, ModeChange, ModeTriggers};
use super::palette::ColorPalette;
use super::scene;
use super::vertex_list::VertexList;
use crate::camera::{FlyCamera, Perspective};
use crate::input::{FpsMouseState, InputState};
use crate::render::FramePlan;
use crate::world::GridConfig;

pub struct EditorState {
    cursor: GridCursor,
    vertices: VertexList,
    palette: ColorPalette,
    mode: EditorMode,
    camera: FlyCamera,
    look: FpsMouseState,
    perspective: Perspective,
    grid: GridConfig,
    clear_color: [f64; 4],
    bindings: EditorBindings,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            cursor: GridCursor::new(),
            vertices: VertexList::new(),
            palette: ColorPalette::from_rgb(&config.palette),
            mode: EditorMode::Edit,
            camera: config.camera.fly_camera(),
            look: FpsMouseState::new(),
            perspective: config.camera.perspective(),
            grid: config.grid,
            clear_color: config.window.clear_color,
            bindings: config.bindings.clone(),
        }
    }

    /// Advance one frame.
    ///
    /// Order: camera movement (Camera mode only), mode poll, then Edit keys or
    /// Camera look depending on the mode after the poll. Returns the net mode
    /// change so the caller can capture or release the pointer.
    pub fn update(&mut self, input: &InputState, delta_time: f32) -> Option<ModeChange> {
        if self.mode.is_camera() {
            let fly = &self.bindings.fly;
            let keys = input.movement(fly.forward, fly.backward, fly.left, fly.right);
            self.camera.apply_movement(keys, delta_time);
        }

        let triggers = ModeTriggers {
            enter_camera: input.mouse_active(self.bindings.enter_camera),
            exit_camera: input.key_active(self.bindings.exit_camera),
        };
        let change = self.mode.poll(triggers);
        if change.is_some() {
            self.look.set_captured(self.mode.is_camera());
            tracing::info!("entered {} mode", self.mode);
        }

        match self.mode {
            EditorMode::Edit => self.handle_edit_keys(input),
            EditorMode::Camera => {
                let (dx, dy) = input.mouse_delta();
                self.look.accumulate_delta(dx, dy);
                let (dx, dy) = self.look.consume_delta();
                self.camera.apply_look(dx, dy);
            }
        }

        change
    }

    fn handle_edit_keys(&mut self, input: &InputState) {
        for (key, step) in self.bindings.cursor.steps() {
            if input.key_just_pressed(key) {
                self.cursor.step(step);
                tracing::debug!("cursor {:?} -> {}", step, self.cursor.position());
            }
        }

        if input.key_just_pressed(self.bindings.place_vertex) {
            let position = self.cursor.world_position();
            self.vertices.place_vertex(position, self.palette.current());
            tracing::info!(
                "placed vertex at {} ({} vertices, {} quads)",
                position,
                self.vertices.len(),
                self.vertices.quad_count()
            );
        }

        if input.key_just_pressed(self.bindings.cycle_color) {
            let color = self.palette.cycle();
            tracing::info!("color {} selected: {}", self.palette.index(), color);
        }
    }

    /// Describe the current frame for a viewport of the given size.
    pub fn frame_plan(&self, width: u32, height: u32) -> FramePlan {
        scene::build_frame_plan(self, width, height)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    pub fn vertices(&self) -> &VertexList {
        &self.vertices
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn current_color(&self) -> Vec3 {
        self.palette.current()
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn perspective(&self) -> &Perspective {
        &self.perspective
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn clear_color(&self) -> [f64; 4] {
        self.clear_color
    }

    pub fn bindings(&self) -> &EditorBindings {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseButton};
    use glam::IVec3;

    fn tap(state: &mut EditorState, input: &mut InputState, key: KeyCode) {
        input.handle_key(key, true);
        state.update(input, 0.016);
        input.end_frame();
        input.handle_key(key, false);
        state.update(input, 0.016);
        input.end_frame();
    }

    #[test]
    fn test_place_at_cursor_with_current_color() {
        let mut state = EditorState::default();
        let mut input = InputState::new();

        tap(&mut state, &mut input, KeyCode::ArrowUp);
        tap(&mut state, &mut input, KeyCode::C);
        tap(&mut state, &mut input, KeyCode::Space);

        let placed = state.vertices().vertices()[0];
        assert_eq!(placed.position, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(placed.color, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_held_key_moves_cursor_once() {
        let mut state = EditorState::default();
        let mut input = InputState::new();

        input.handle_key(KeyCode::K, true);
        for _ in 0..10 {
            state.update(&input, 0.016);
            input.end_frame();
            // OS key repeat
            input.handle_key(KeyCode::K, true);
        }
        assert_eq!(state.cursor().position(), IVec3::new(0, 1, 0));
    }

    #[test]
    fn test_edit_keys_ignored_in_camera_mode() {
        let mut state = EditorState::default();
        let mut input = InputState::new();

        input.handle_mouse_button(MouseButton::Left, true);
        assert_eq!(state.update(&input, 0.016), Some(ModeChange::EnteredCamera));
        input.end_frame();

        tap(&mut state, &mut input, KeyCode::Space);
        tap(&mut state, &mut input, KeyCode::ArrowLeft);
        assert!(state.vertices().is_empty());
        assert_eq!(state.cursor().position(), IVec3::ZERO);
    }

    #[test]
    fn test_camera_keys_ignored_in_edit_mode() {
        let mut state = EditorState::default();
        let mut input = InputState::new();
        let start = state.camera().position;

        input.handle_key(KeyCode::W, true);
        input.handle_mouse_delta(50.0, 20.0);
        state.update(&input, 1.0);

        assert_eq!(state.camera().position, start);
        assert_eq!(state.camera().yaw(), 90.0);
    }
}
