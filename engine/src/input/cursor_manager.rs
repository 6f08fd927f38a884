//! Cursor Manager Module
//!
//! Tracks whether the pointer should be captured for mouse-look and applies
//! that to a winit window. Camera mode captures; edit mode releases.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new_released();
//!
//! // Editor entered camera mode
//! cursor.capture();
//! cursor.apply_to_window(&window);
//! ```

use winit::window::{CursorGrabMode, Window};

/// Manages pointer capture for the fly camera.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether mouse-look capture is requested (cursor locked, hidden)
    captured: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new_released()
    }
}

impl CursorManager {
    /// Create a CursorManager with the cursor visible and free.
    pub fn new_released() -> Self {
        Self {
            captured: false,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    /// Check if capture is currently requested.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Request capture: lock and hide the cursor.
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.state_dirty = true;
        }
    }

    /// Release capture: free and show the cursor.
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.state_dirty = true;
        }
    }

    /// Handle window focus changes. Capture preference is kept and restored on refocus.
    pub fn set_focus(&mut self, focused: bool) {
        if self.has_focus != focused {
            self.has_focus = focused;
            self.state_dirty = true;
        }
    }

    /// Cursor is hidden only while captured and focused.
    pub fn should_cursor_be_visible(&self) -> bool {
        !(self.captured && self.has_focus)
    }

    /// Cursor is grabbed only while captured and focused.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.captured && self.has_focus
    }

    /// Push pending state to the window, if any.
    ///
    /// Prefers `Locked` (relative motion, cursor pinned) and falls back to
    /// `Confined` on platforms without pointer lock.
    pub fn apply_to_window(&mut self, window: &Window) {
        if !self.state_dirty {
            return;
        }

        if self.should_cursor_be_grabbed() {
            if let Err(err) = window.set_cursor_grab(CursorGrabMode::Locked) {
                tracing::debug!("cursor lock unavailable ({err}), confining instead");
                if let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined) {
                    tracing::warn!("failed to grab cursor: {err}");
                }
            }
        } else if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
            tracing::warn!("failed to release cursor: {err}");
        }
        window.set_cursor_visible(self.should_cursor_be_visible());

        self.state_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_released() {
        let cursor = CursorManager::new_released();
        assert!(!cursor.is_captured());
        assert!(cursor.has_focus());
        assert!(cursor.is_dirty());
        assert!(cursor.should_cursor_be_visible());
    }

    #[test]
    fn test_capture_release_marks_dirty_on_change_only() {
        let mut cursor = CursorManager::new_released();
        cursor.state_dirty = false;

        cursor.capture();
        assert!(cursor.is_captured());
        assert!(cursor.is_dirty());

        cursor.state_dirty = false;
        cursor.capture();
        assert!(!cursor.is_dirty());

        cursor.release();
        assert!(!cursor.is_captured());
        assert!(cursor.is_dirty());
    }

    #[test]
    fn test_cursor_visibility_state() {
        let mut cursor = CursorManager::new_released();
        cursor.capture();

        // Captured + focus = hidden cursor
        assert!(!cursor.should_cursor_be_visible());
        assert!(cursor.should_cursor_be_grabbed());

        // Captured but no focus = visible cursor
        cursor.set_focus(false);
        assert!(cursor.should_cursor_be_visible());
        assert!(!cursor.should_cursor_be_grabbed());
        // Capture preference is preserved
        assert!(cursor.is_captured());

        cursor.set_focus(true);
        assert!(cursor.should_cursor_be_grabbed());
    }
}
