//! FPS-style Mouse State Tracker
//!
//! Accumulates raw pointer deltas for mouse-look while the cursor is captured.
//! The first sample after a capture is dropped: the pointer may have travelled
//! while it was free, and feeding that into the camera makes the view jump.

/// FPS-style mouse state tracker with delta accumulation.
///
/// # Example
///
/// ```rust,ignore
/// use quad_editor_engine::input::FpsMouseState;
///
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// mouse.accumulate_delta(40.0, 0.0); // dropped, first sample after capture
/// mouse.accumulate_delta(3.0, 2.0);
///
/// let (dx, dy) = mouse.consume_delta(); // (3.0, 2.0)
/// camera.apply_look(dx, dy);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Whether the cursor is currently captured (hidden and locked).
    cursor_captured: bool,
    /// Drop the next non-zero sample.
    discard_next: bool,
}

impl FpsMouseState {
    /// Create a new FPS mouse state with zero deltas and cursor not captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta. Ignored while not captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured || (dx == 0.0 && dy == 0.0) {
            return;
        }
        if self.discard_next {
            self.discard_next = false;
            return;
        }
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Set whether the cursor is captured.
    ///
    /// Capturing arms the first-sample discard; releasing clears pending deltas.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        if captured && !self.cursor_captured {
            self.discard_next = true;
        }
        self.cursor_captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
            self.discard_next = false;
        }
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }
}
