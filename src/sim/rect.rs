//! Axis-aligned rectangle geometry for paddle, ball and bricks
//!
//! All playfield geometry is integer pixels with the origin at the top-left
//! corner and y growing downwards.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point in doubled coordinates (exact for odd sizes)
    #[inline]
    pub fn center2(&self) -> IVec2 {
        self.pos * 2 + self.size
    }

    /// Overlap test; rectangles sharing an edge count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || other.right() < self.left()
            || self.bottom() < other.top()
            || other.bottom() < self.top())
    }

    /// Whether the horizontal extents overlap (inclusive)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }

    /// Penetration depth on each axis using half-extents, in doubled units.
    ///
    /// `(w_a + w_b) - |2·cx_a - 2·cx_b|`, which is twice the usual
    /// `(w_a + w_b)/2 - |cx_a - cx_b|`. Comparing the two axes gives the
    /// same answer without rounding.
    pub fn penetration2(&self, other: &Rect) -> IVec2 {
        let delta = (self.center2() - other.center2()).abs();
        self.size + other.size - delta
    }

    /// Whether the rectangle lies entirely inside `[0, w] x [0, h]`
    pub fn within(&self, w: i32, h: i32) -> bool {
        self.left() >= 0 && self.top() >= 0 && self.right() <= w && self.bottom() <= h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_touching_edges_counts() {
        let a = Rect::new(0, 0, 10, 10);
        // Shares the x = 10 edge
        assert!(a.overlaps(&Rect::new(10, 0, 10, 10)));
        // Shares the y = 10 edge
        assert!(a.overlaps(&Rect::new(0, 10, 10, 10)));
        // Corner touch
        assert!(a.overlaps(&Rect::new(10, 10, 5, 5)));
        // One pixel apart
        assert!(!a.overlaps(&Rect::new(11, 0, 10, 10)));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_penetration_doubled() {
        // Ball 15x15 at (100, 45), brick 125x30 at (100, 50)
        let ball = Rect::new(100, 45, 15, 15);
        let brick = Rect::new(100, 50, 125, 30);
        let p = ball.penetration2(&brick);
        // centers2: ball (215, 105), brick (325, 130)
        assert_eq!(p.x, 140 - 110);
        assert_eq!(p.y, 45 - 25);
    }

    #[test]
    fn test_within() {
        assert!(Rect::new(0, 0, 15, 15).within(1280, 720));
        assert!(Rect::new(1265, 705, 15, 15).within(1280, 720));
        assert!(!Rect::new(-1, 0, 15, 15).within(1280, 720));
        assert!(!Rect::new(1266, 0, 15, 15).within(1280, 720));
    }
}
