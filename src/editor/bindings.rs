//! Key Bindings
//!
//! Every editor action as data, so the key map can be changed from the
//! config file instead of inline `match` arms.

use serde::{Deserialize, Serialize};

use super::cursor::CursorStep;
use crate::input::{KeyCode, MouseButton};

/// Cursor movement keys (Edit mode).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
}

impl Default for CursorBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::ArrowUp,
            back: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            up: KeyCode::K,
            down: KeyCode::J,
        }
    }
}

impl CursorBindings {
    /// Key and step pairs, in a fixed order.
    pub fn steps(&self) -> [(KeyCode, CursorStep); 6] {
        [
            (self.forward, CursorStep::Forward),
            (self.back, CursorStep::Back),
            (self.left, CursorStep::Left),
            (self.right, CursorStep::Right),
            (self.up, CursorStep::Up),
            (self.down, CursorStep::Down),
        ]
    }
}

/// Fly camera movement keys (Camera mode).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for FlyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            backward: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }
}

/// Centralized editor key map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorBindings {
    pub cursor: CursorBindings,
    pub fly: FlyBindings,
    pub place_vertex: KeyCode,
    pub cycle_color: KeyCode,
    pub enter_camera: MouseButton,
    pub exit_camera: KeyCode,
}

impl Default for EditorBindings {
    fn default() -> Self {
        Self {
            cursor: CursorBindings::default(),
            fly: FlyBindings::default(),
            place_vertex: KeyCode::Space,
            cycle_color: KeyCode::C,
            enter_camera: MouseButton::Left,
            exit_camera: KeyCode::Escape,
        }
    }
}

impl EditorBindings {
    /// One line per action, for the startup help text.
    pub fn describe(&self) -> Vec<String> {
        let c = &self.cursor;
        let f = &self.fly;
        vec![
            format!(
                "cursor: {:?}/{:?} z, {:?}/{:?} x, {:?}/{:?} y",
                c.forward, c.back, c.left, c.right, c.up, c.down
            ),
            format!("place vertex: {:?}", self.place_vertex),
            format!("cycle color: {:?}", self.cycle_color),
            format!("enter camera mode: {:?} mouse", self.enter_camera),
            format!("exit camera mode: {:?}", self.exit_camera),
            format!(
                "fly: {:?}/{:?}/{:?}/{:?}",
                f.forward, f.left, f.backward, f.right
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_map() {
        let bindings = EditorBindings::default();
        assert_eq!(bindings.place_vertex, KeyCode::Space);
        assert_eq!(bindings.cycle_color, KeyCode::C);
        assert_eq!(bindings.enter_camera, MouseButton::Left);
        assert_eq!(bindings.exit_camera, KeyCode::Escape);
        assert_eq!(bindings.fly.forward, KeyCode::W);
    }

    #[test]
    fn test_cursor_steps_cover_every_direction() {
        let steps = CursorBindings::default().steps();
        for step in CursorStep::ALL {
            assert!(steps.iter().any(|(_, s)| *s == step), "{step:?}");
        }
        assert_eq!(steps[0], (KeyCode::ArrowUp, CursorStep::Forward));
        assert_eq!(steps[4], (KeyCode::K, CursorStep::Up));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let bindings: EditorBindings =
            serde_json::from_str(r#"{ "place_vertex": "Enter", "cursor": { "up": "E" } }"#)
                .unwrap();
        assert_eq!(bindings.place_vertex, KeyCode::Enter);
        assert_eq!(bindings.cursor.up, KeyCode::E);
        assert_eq!(bindings.cursor.down, KeyCode::J);
        assert_eq!(bindings.cycle_color, KeyCode::C);
    }

    #[test]
    fn test_describe_lists_every_action() {
        let lines = EditorBindings::default().describe();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Space"));
    }
}
