//! Mouse Input Module
//!
//! Mouse button identifiers, decoupled from winit.

use serde::{Deserialize, Serialize};

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (back, forward, extra)
    Other(u16),
}

impl MouseButton {
    /// Convert a winit mouse button.
    pub fn from_winit(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as Winit;
        match button {
            Winit::Left => MouseButton::Left,
            Winit::Middle => MouseButton::Middle,
            Winit::Right => MouseButton::Right,
            Winit::Back => MouseButton::Other(3),
            Winit::Forward => MouseButton::Other(4),
            Winit::Other(id) => MouseButton::Other(id),
        }
    }
}
