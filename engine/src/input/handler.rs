//! Input Handler
//!
//! Folds window events into per-frame input state. Held state persists across
//! frames; press edges and the raw pointer delta last until [`InputState::end_frame`].

use std::collections::HashMap;

use super::keyboard::{KeyCode, MovementKeys};
use super::mouse::MouseButton;

/// State of a key or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl KeyState {
    fn update(&mut self, pressed: bool) {
        // Edges latch until end_frame so a tap shorter than a frame still registers.
        if pressed && !self.pressed {
            self.just_pressed = true;
        }
        if !pressed && self.pressed {
            self.just_released = true;
        }
        self.pressed = pressed;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Held now, or pressed at some point this frame.
    pub fn is_active(&self) -> bool {
        self.pressed || self.just_pressed
    }
}

/// Input gathered since the last `end_frame`, plus held keys and buttons.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held state and edges per key
    keys: HashMap<KeyCode, KeyState>,
    /// Held state and edges per button
    buttons: HashMap<MouseButton, KeyState>,
    /// Raw pointer movement accumulated since last frame
    mouse_delta: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event. Repeated presses while held are not new edges.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Unknown {
            return;
        }
        self.keys.entry(key).or_default().update(pressed);
    }

    /// Record a button press or release.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.entry(button).or_default().update(pressed);
    }

    /// Add raw device motion; several events per frame sum up.
    pub fn handle_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Drop edges and motion once the frame has consumed them. Held state stays.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.clear_edges();
        }
        for state in self.buttons.values_mut() {
            state.clear_edges();
        }
        self.mouse_delta = (0.0, 0.0);
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if a key is currently held
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.pressed)
    }

    /// Check if a key was pressed this frame
    pub fn key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_pressed)
    }

    /// Check if a key was released this frame
    pub fn key_just_released(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_released)
    }

    /// Held now or pressed this frame
    pub fn key_active(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(KeyState::is_active)
    }

    /// Check if a mouse button is currently held
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.pressed)
    }

    /// Check if a mouse button was pressed this frame
    pub fn mouse_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.just_pressed)
    }

    /// Held now or pressed this frame
    pub fn mouse_active(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(KeyState::is_active)
    }

    /// Motion summed over this frame
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Held state of four movement keys.
    pub fn movement(
        &self,
        forward: KeyCode,
        backward: KeyCode,
        left: KeyCode,
        right: KeyCode,
    ) -> MovementKeys {
        MovementKeys {
            forward: self.key_pressed(forward),
            backward: self.key_pressed(backward),
            left: self.key_pressed(left),
            right: self.key_pressed(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_only_once() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        assert!(input.key_just_pressed(KeyCode::Space));
        input.end_frame();

        // OS key repeat delivers another press while held
        input.handle_key(KeyCode::Space, true);
        assert!(input.key_pressed(KeyCode::Space));
        assert!(!input.key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn test_tap_within_one_frame_is_kept() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::C, true);
        input.handle_key(KeyCode::C, false);

        assert!(!input.key_pressed(KeyCode::C));
        assert!(input.key_just_pressed(KeyCode::C));
        assert!(input.key_just_released(KeyCode::C));
        assert!(input.key_active(KeyCode::C));

        input.end_frame();
        assert!(!input.key_active(KeyCode::C));
    }

    #[test]
    fn test_mouse_button_active() {
        let mut input = InputState::new();
        assert!(!input.mouse_active(MouseButton::Left));

        input.handle_mouse_button(MouseButton::Left, true);
        assert!(input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_just_pressed(MouseButton::Left));
        input.end_frame();

        assert!(input.mouse_active(MouseButton::Left));
        assert!(!input.mouse_just_pressed(MouseButton::Left));
    }

    #[test]
    fn test_mouse_delta_accumulates_per_frame() {
        let mut input = InputState::new();
        input.handle_mouse_delta(3.0, -1.0);
        input.handle_mouse_delta(2.0, 4.0);
        assert_eq!(input.mouse_delta(), (5.0, 3.0));

        input.end_frame();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Unknown, true);
        assert!(!input.key_pressed(KeyCode::Unknown));
    }

    #[test]
    fn test_movement_snapshot() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::D, true);

        let keys = input.movement(KeyCode::W, KeyCode::S, KeyCode::A, KeyCode::D);
        assert_eq!(keys.forward_axis(), 1);
        assert_eq!(keys.right_axis(), 1);
    }
}
