//! Region codes for Cohen–Sutherland classification.
//!
//! The plane around a clip window is split into nine regions. Each point gets
//! a 4-bit code telling which sides of the window it lies beyond:
//!
//! ```text
//!          |        |
//!   1001   |  1000  |  1010        TOP
//! ---------+--------+---------
//!   0001   |  0000  |  0010
//! ---------+--------+---------
//!   0101   |  0100  |  0110        BOTTOM
//!          |        |
//!   LEFT               RIGHT
//! ```
//!
//! "Bottom" is the `min_y` side and "top" the `max_y` side. In a y-down pixel
//! buffer that puts TOP at the bottom of the screen; the algorithm does not
//! care.

use bitflags::bitflags;

use super::window::ClipWindow;
use crate::math::point::Point;

bitflags! {
    /// Set of window sides a point lies beyond.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        /// Beyond `min_y`.
        const BOTTOM = 0b0100;
        /// Beyond `max_y`.
        const TOP = 0b1000;
    }
}

impl Outcode {
    pub const INSIDE: Self = Self::empty();

    /// True when no side is violated.
    #[inline]
    pub const fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// Computes the region code of `point` relative to `window`.
///
/// Boundaries are inclusive: a point with `x == min_x` is inside on the
/// horizontal axis.
#[inline]
pub fn classify(point: Point, window: &ClipWindow) -> Outcode {
    let mut code = Outcode::INSIDE;

    if point.x < window.min_x() {
        code |= Outcode::LEFT;
    } else if point.x > window.max_x() {
        code |= Outcode::RIGHT;
    }

    if point.y < window.min_y() {
        code |= Outcode::BOTTOM;
    } else if point.y > window.max_y() {
        code |= Outcode::TOP;
    }

    code
}
