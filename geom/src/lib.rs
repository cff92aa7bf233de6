//! Geometric and color value types shared by the UI layers.
//!
//! Contains:
//! - 2D/4D vectors (Vec2, Vec4)
//! - Axis-aligned rectangles with point containment (Rect)
//! - RGBA color with clamping and an "empty" sentinel (Rgba)
//!
//! This crate has no GUI dependency so the dropdown-menu hit-testing and
//! color math are testable without a graphics context.

mod color;
mod rect;
mod vec;

pub use color::{Rgba, RGBA_EMPTY_VALUE, RGBA_MAX_VALUE, RGBA_MIN_VALUE};
pub use rect::Rect;
pub use vec::{Vec2, Vec4};
