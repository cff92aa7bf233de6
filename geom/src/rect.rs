//! Axis-aligned rectangle with point containment
//!
//! The dropdown-menu overlay has no native hit regions in the render
//! library, so click/hover resolution is rectangle-contains-point math on
//! these values.

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Axis-aligned rectangle in screen space
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Inclusive on the min edge, exclusive on the max edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Grow the rectangle outward by `amount` on each side
    pub fn expand(&self, amount: Vec2) -> Rect {
        Rect::new(self.min - amount, self.max + amount)
    }

    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.min + offset, self.max + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_size() {
        let r = Rect::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(r.max, Vec2::new(40.0, 60.0));
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 40.0);
        assert_eq!(r.size(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_contains_interior_and_edges() {
        let r = Rect::from_min_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(!r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(-0.1, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 11.0)));
    }

    #[test]
    fn test_expand() {
        let r = Rect::from_min_size(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        let e = r.expand(Vec2::new(2.0, 3.0));
        assert_eq!(e.min, Vec2::new(8.0, 7.0));
        assert_eq!(e.max, Vec2::new(22.0, 23.0));
    }

    #[test]
    fn test_translate() {
        let r = Rect::from_min_size(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
        let t = r.translate(Vec2::new(3.0, -2.0));
        assert_eq!(t.min, Vec2::new(3.0, -2.0));
        assert_eq!(t.size(), Vec2::new(5.0, 5.0));
    }
}
