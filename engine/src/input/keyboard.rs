//! Keyboard Input Module
//!
//! Contains generic key codes and held-state tracking for fly-camera movement.
//! Decoupled from winit apart from the single conversion in [`KeyCode::from_winit`].

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of the windowing system.
///
/// Only the keys the editor can bind are listed; everything else arrives as
/// [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Fly camera
    W,
    A,
    S,
    D,

    // Cursor
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    J,
    K,

    // Editing
    Space,
    C,

    // Spare letters for remapping
    E,
    Q,
    F,
    R,
    X,
    Z,

    // Control keys
    Escape,
    Enter,
    Tab,
    ShiftLeft,
    ControlLeft,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Convert a winit physical key code.
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;
        match code {
            Winit::KeyW => KeyCode::W,
            Winit::KeyA => KeyCode::A,
            Winit::KeyS => KeyCode::S,
            Winit::KeyD => KeyCode::D,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::KeyJ => KeyCode::J,
            Winit::KeyK => KeyCode::K,
            Winit::Space => KeyCode::Space,
            Winit::KeyC => KeyCode::C,
            Winit::KeyE => KeyCode::E,
            Winit::KeyQ => KeyCode::Q,
            Winit::KeyF => KeyCode::F,
            Winit::KeyR => KeyCode::R,
            Winit::KeyX => KeyCode::X,
            Winit::KeyZ => KeyCode::Z,
            Winit::Escape => KeyCode::Escape,
            Winit::Enter => KeyCode::Enter,
            Winit::Tab => KeyCode::Tab,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ControlLeft => KeyCode::ControlLeft,
            _ => KeyCode::Unknown,
        }
    }
}

/// Tracks which fly-camera movement keys are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Move along the look direction
    pub forward: bool,
    /// Move against the look direction
    pub backward: bool,
    /// Strafe left
    pub left: bool,
    /// Strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys {
            forward: true,
            backward: true,
            ..Default::default()
        };
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.backward = false;
        keys.left = true;
        assert_eq!(keys.forward_axis(), 1);
        assert_eq!(keys.right_axis(), -1);
        assert!(keys.any_pressed());
    }

    #[test]
    fn test_from_winit() {
        use winit::keyboard::KeyCode as Winit;
        assert_eq!(KeyCode::from_winit(Winit::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from_winit(Winit::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_winit(Winit::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from_winit(Winit::F12), KeyCode::Unknown);
    }

    #[test]
    fn test_key_code_serde_names() {
        let key: KeyCode = serde_json::from_str("\"ArrowUp\"").unwrap();
        assert_eq!(key, KeyCode::ArrowUp);
        assert_eq!(serde_json::to_string(&KeyCode::Space).unwrap(), "\"Space\"");
    }
}
