//! Axis-aligned clip rectangles.

use crate::math::point::Point;

/// An axis-aligned clip rectangle with inclusive integer bounds.
///
/// Callers must keep `min_x <= max_x` and `min_y <= max_y`. This is only
/// checked in debug builds; clipping against an inverted window gives
/// unspecified (but memory safe) results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl ClipWindow {
    /// Creates a window from its inclusive bounds.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(min_x <= max_x, "inverted clip window: min_x > max_x");
        debug_assert!(min_y <= max_y, "inverted clip window: min_y > max_y");
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Window covering a whole `width` x `height` pixel grid.
    ///
    /// # Panics
    /// Panics in debug builds if either dimension is zero.
    pub fn from_size(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "empty pixel grid");
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of pixel columns covered (bounds are inclusive).
    ///
    /// Returned as `u64`: a window spanning all of `i32` is 2^32 columns wide.
    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x) as u64 + 1
    }

    /// Number of pixel rows covered (bounds are inclusive).
    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y) as u64 + 1
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// The overlap of two windows, or `None` if they are disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);

        if min_x > max_x || min_y > max_y {
            None
        } else {
            Some(Self::new(min_x, min_y, max_x, max_y))
        }
    }
}
