//! Cohen–Sutherland line clipping.
//!
//! # Algorithm Overview
//!
//! Both endpoints are classified with a 4-bit [`Outcode`]. Then, repeatedly:
//!
//! 1. If both codes are zero the segment is inside: **accept**.
//! 2. If the codes share a flag both endpoints lie beyond the same side, so
//!    the segment cannot cross the window: **reject**.
//! 3. Otherwise pick an endpoint that is outside, intersect the line with one
//!    of the window sides it violates, move the endpoint there and reclassify.
//!
//! Sides are tried in the order TOP, BOTTOM, RIGHT, LEFT. For a point in a
//! corner region this resolves the y crossing before the x crossing, which
//! decides the clipped pixels of diagonal lines leaving through a corner.
//!
//! # Precision
//!
//! Intersections are computed with integer arithmetic and truncated toward
//! zero, the same way the rasterizer addresses pixels. The multiply-divide
//! runs in `i128`, which is exact for any pair of `i32` endpoints.
//!
//! # References
//!
//! - Foley, van Dam et al., "Computer Graphics: Principles and Practice", 3.12
//! - <https://en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm>

use super::outcode::{classify, Outcode};
use super::window::ClipWindow;
use crate::math::point::{Point, Segment};

/// Outcome of clipping a segment against a window.
///
/// On acceptance `segment` is the visible part of the input and both of its
/// endpoints lie inside the window. On rejection `segment` holds whatever
/// partially clipped state the algorithm reached before giving up; it is not
/// the original input and should not be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineClip {
    pub accepted: bool,
    pub segment: Segment,
}

impl LineClip {
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The visible segment, or `None` if nothing of the line is inside.
    pub fn into_option(self) -> Option<Segment> {
        self.accepted.then_some(self.segment)
    }
}

/// Clips `segment` to `window`.
///
/// The window must satisfy `min <= max` on both axes.
///
/// # Example
/// ```
/// use pixclip::clipper::{clip, ClipWindow};
/// use pixclip::math::point::Segment;
///
/// let window = ClipWindow::new(0, 0, 10, 10);
/// let result = clip(Segment::from_coords(-5, 5, 15, 5), &window);
/// assert!(result.accepted);
/// assert_eq!(result.segment, Segment::from_coords(0, 5, 10, 5));
/// ```
pub fn clip(segment: Segment, window: &ClipWindow) -> LineClip {
    let Segment { mut p0, mut p1 } = segment;

    let mut code0 = classify(p0, window);
    let mut code1 = classify(p1, window);

    let accepted = loop {
        if (code0 | code1).is_inside() {
            break true;
        }
        if code0.intersects(code1) {
            break false;
        }

        // At least one endpoint is outside; prefer the first.
        if !code0.is_inside() {
            p0 = boundary_intersection(code0, p0, p1, window);
            code0 = classify(p0, window);
        } else {
            p1 = boundary_intersection(code1, p0, p1, window);
            code1 = classify(p1, window);
        }
    };

    LineClip {
        accepted,
        segment: Segment::new(p0, p1),
    }
}

/// Clips the segment `p0`-`p1` to `window`, rewriting the endpoints.
///
/// Returns true if any part of the segment is visible. On `false` the
/// endpoints are left in an intermediate, partially clipped state.
pub fn clip_in_place(p0: &mut Point, p1: &mut Point, window: &ClipWindow) -> bool {
    let result = clip(Segment::new(*p0, *p1), window);
    *p0 = result.segment.p0;
    *p1 = result.segment.p1;
    result.accepted
}

/// Intersects the line through `p0` and `p1` with the window side selected
/// by `code` (the outcode of the endpoint being replaced).
///
/// Callers guarantee the segment crosses the chosen side, so the divisor is
/// never zero: a TOP/BOTTOM side is only picked when the other endpoint is
/// not beyond it, and a RIGHT/LEFT side only when the outside point is
/// vertically inside and the other point is not beyond that side.
#[inline]
fn boundary_intersection(code: Outcode, p0: Point, p1: Point, window: &ClipWindow) -> Point {
    let (x0, y0) = (p0.x as i128, p0.y as i128);
    let (x1, y1) = (p1.x as i128, p1.y as i128);

    let (x, y) = if code.contains(Outcode::TOP) {
        let y = window.max_y() as i128;
        (x0 + (x1 - x0) * (y - y0) / (y1 - y0), y)
    } else if code.contains(Outcode::BOTTOM) {
        let y = window.min_y() as i128;
        (x0 + (x1 - x0) * (y - y0) / (y1 - y0), y)
    } else if code.contains(Outcode::RIGHT) {
        let x = window.max_x() as i128;
        (x, y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    } else {
        debug_assert!(code.contains(Outcode::LEFT), "endpoint is not outside");
        let x = window.min_x() as i128;
        (x, y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    };

    // The intersection lies between the two endpoints, so it fits in i32.
    Point::new(x as i32, y as i32)
}
