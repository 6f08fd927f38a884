//! Editor Mode
//!
//! Two-state machine: Edit (cursor and placement keys) and Camera (fly camera).

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditorMode {
    #[default]
    Edit,
    Camera,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Edit => write!(f, "edit"),
            EditorMode::Camera => write!(f, "camera"),
        }
    }
}

/// Mode triggers sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeTriggers {
    /// Enter Camera (primary pointer button held or pressed this frame)
    pub enter_camera: bool,
    /// Return to Edit (cancel key held or pressed this frame)
    pub exit_camera: bool,
}

/// A net mode change produced by one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnteredCamera,
    EnteredEdit,
}

impl ModeChange {
    pub fn mode(self) -> EditorMode {
        match self {
            ModeChange::EnteredCamera => EditorMode::Camera,
            ModeChange::EnteredEdit => EditorMode::Edit,
        }
    }
}

impl EditorMode {
    /// Apply one frame of triggers. Enter is applied before exit, so exit wins
    /// when both are active.
    pub fn poll(&mut self, triggers: ModeTriggers) -> Option<ModeChange> {
        let before = *self;
        if triggers.enter_camera {
            *self = EditorMode::Camera;
        }
        if triggers.exit_camera {
            *self = EditorMode::Edit;
        }

        match (before, *self) {
            (EditorMode::Edit, EditorMode::Camera) => Some(ModeChange::EnteredCamera),
            (EditorMode::Camera, EditorMode::Edit) => Some(ModeChange::EnteredEdit),
            _ => None,
        }
    }

    pub fn is_edit(self) -> bool {
        self == EditorMode::Edit
    }

    pub fn is_camera(self) -> bool {
        self == EditorMode::Camera
    }
}
