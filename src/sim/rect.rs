//! Integer rectangle geometry for screen-space collision
//!
//! Classic framebuffer conventions: origin top-left, y grows downward,
//! `right`/`bottom` are exclusive edges. Overlap is strict, so rects that
//! merely share an edge do not collide. Halving in `from_center` and
//! `inflate` truncates toward zero, which keeps hitbox math stable for
//! odd sizes.

use serde::{Deserialize, Serialize};

/// An axis-aligned rect in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of the given size centered on (cx, cy)
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self {
            x: cx - w / 2,
            y: cy - h / 2,
            w,
            h,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point, truncating on odd sizes
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move the rect so its top edge sits at `top`
    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move the rect so its bottom edge sits at `bottom`
    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Grow (positive) or shrink (negative) by the given totals, keeping the
    /// center fixed up to integer truncation
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self {
            x: self.x - dw / 2,
            y: self.y - dh / 2,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    /// Strict overlap test; shared edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
