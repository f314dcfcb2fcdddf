/// An integer point in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two integer points.
///
/// The endpoint order is preserved by clipping: `p0` of the clipped segment
/// always lies on the `p0` side of the original one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Shorthand for building a segment from raw coordinates.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The segment with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_reversal() {
        let s = Segment::from_coords(0, 1, 2, 3);
        assert_eq!(s.reversed(), Segment::from_coords(2, 3, 0, 1));
        assert_eq!(s.reversed().reversed(), s);
    }
}
