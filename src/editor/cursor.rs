//! Grid Cursor
//!
//! Integer cursor marking where the next vertex is placed. Unbounded: it can
//! leave the drawn grid.

use glam::{IVec3, Vec3};

/// One discrete cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorStep {
    /// +Z
    Forward,
    /// −Z
    Back,
    /// +X, mirrored to match the default camera facing +Z
    Left,
    /// −X
    Right,
    /// +Y
    Up,
    /// −Y
    Down,
}

impl CursorStep {
    pub const ALL: [CursorStep; 6] = [
        CursorStep::Forward,
        CursorStep::Back,
        CursorStep::Left,
        CursorStep::Right,
        CursorStep::Up,
        CursorStep::Down,
    ];

    /// Unit offset applied by this step.
    pub fn offset(self) -> IVec3 {
        match self {
            CursorStep::Forward => IVec3::Z,
            CursorStep::Back => IVec3::NEG_Z,
            CursorStep::Left => IVec3::X,
            CursorStep::Right => IVec3::NEG_X,
            CursorStep::Up => IVec3::Y,
            CursorStep::Down => IVec3::NEG_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    position: IVec3,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> IVec3 {
        self.position
    }

    /// Cursor position in world space.
    pub fn world_position(&self) -> Vec3 {
        self.position.as_vec3()
    }

    pub fn step(&mut self, step: CursorStep) {
        self.position += step.offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(GridCursor::new().position(), IVec3::ZERO);
    }

    #[test]
    fn test_each_step_moves_one_axis() {
        let expected = [
            (CursorStep::Forward, IVec3::new(0, 0, 1)),
            (CursorStep::Back, IVec3::new(0, 0, -1)),
            (CursorStep::Left, IVec3::new(1, 0, 0)),
            (CursorStep::Right, IVec3::new(-1, 0, 0)),
            (CursorStep::Up, IVec3::new(0, 1, 0)),
            (CursorStep::Down, IVec3::new(0, -1, 0)),
        ];
        for (step, position) in expected {
            let mut cursor = GridCursor::new();
            cursor.step(step);
            assert_eq!(cursor.position(), position, "{step:?}");
        }
    }

    #[test]
    fn test_not_clamped_to_grid() {
        let mut cursor = GridCursor::new();
        for _ in 0..100 {
            cursor.step(CursorStep::Left);
        }
        assert_eq!(cursor.position().x, 100);
        assert_eq!(cursor.world_position(), Vec3::new(100.0, 0.0, 0.0));
    }
}
