//! World Module
//!
//! Contains world-space configuration: the reference grid on the XZ plane.

pub mod grid;

pub use grid::GridConfig;
