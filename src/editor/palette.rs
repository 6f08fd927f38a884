//! Color Palette
//!
//! Fixed list of placement colors with a cyclic selection.

use glam::Vec3;

/// Default placement colors: red, green, blue, orange, steel blue.
pub const DEFAULT_COLORS: [[f32; 3]; 5] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.9, 0.5, 0.0],
    [0.2, 0.5, 0.8],
];

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    colors: Vec<Vec3>,
    index: usize,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::from_rgb(&DEFAULT_COLORS)
    }
}

impl ColorPalette {
    /// Build a palette from RGB triples. An empty list falls back to white.
    pub fn from_rgb(colors: &[[f32; 3]]) -> Self {
        let mut colors: Vec<Vec3> = colors.iter().copied().map(Vec3::from_array).collect();
        if colors.is_empty() {
            colors.push(Vec3::ONE);
        }
        Self { colors, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Vec3 {
        self.colors[self.index]
    }

    /// Select the next color, wrapping to the first after the last.
    pub fn cycle(&mut self) -> Vec3 {
        self.index = (self.index + 1) % self.colors.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_red() {
        let palette = ColorPalette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.current(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cycle_visits_every_entry_then_wraps() {
        let mut palette = ColorPalette::default();
        let mut visited = vec![palette.index()];
        for _ in 0..5 {
            palette.cycle();
            visited.push(palette.index());
        }
        assert_eq!(visited, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_last_entry_is_reachable() {
        let mut palette = ColorPalette::default();
        for _ in 0..4 {
            palette.cycle();
        }
        assert_eq!(palette.current(), Vec3::new(0.2, 0.5, 0.8));
    }

    #[test]
    fn test_single_color_palette() {
        let mut palette = ColorPalette::from_rgb(&[[0.5, 0.5, 0.5]]);
        assert_eq!(palette.cycle(), Vec3::splat(0.5));
        assert_eq!(palette.index(), 0);
    }

    #[test]
    fn test_empty_falls_back_to_white() {
        let palette = ColorPalette::from_rgb(&[]);
        assert!(!palette.is_empty());
        assert_eq!(palette.current(), Vec3::ONE);
    }
}
