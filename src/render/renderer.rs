//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! basic drawing operations like lines, rectangles, and grids. All line
//! primitives are clipped to the active clip window before any pixel is
//! touched.

use super::framebuffer::FrameBuffer;
use crate::clipper::{clip, ClipWindow};
use crate::colors;
use crate::math::point::{Point, Segment};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    /// Window requested by the caller; `None` means the whole buffer.
    requested_clip: Option<ClipWindow>,
    /// Requested window intersected with the buffer bounds.
    clip: Option<ClipWindow>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let mut renderer = Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
            requested_clip: None,
            clip: None,
        };
        renderer.update_clip();
        renderer
    }

    /// Reallocate the buffer. A custom clip window survives the resize but is
    /// re-intersected with the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
        self.update_clip();
        log::debug!("renderer resized to {width}x{height}, clip = {:?}", self.clip);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Restrict all drawing to `window`.
    ///
    /// The window is intersected with the buffer bounds. If they don't
    /// overlap, every draw call becomes a no-op until the window is changed.
    pub fn set_clip_window(&mut self, window: ClipWindow) {
        self.requested_clip = Some(window);
        self.update_clip();
        if self.clip.is_none() {
            log::debug!("clip window {window:?} lies outside the buffer, drawing disabled");
        }
    }

    /// Go back to clipping against the whole buffer.
    pub fn reset_clip_window(&mut self) {
        self.requested_clip = None;
        self.update_clip();
    }

    /// The effective clip window, or `None` if nothing is drawable.
    pub fn clip_window(&self) -> Option<ClipWindow> {
        self.clip
    }

    fn update_clip(&mut self) {
        let bounds =
            (self.width > 0 && self.height > 0).then(|| ClipWindow::from_size(self.width, self.height));
        self.clip = match (bounds, self.requested_clip) {
            (Some(bounds), Some(requested)) => bounds.intersect(&requested),
            (bounds, None) => bounds,
            (None, Some(_)) => None,
        };
    }

    /// Fill the whole buffer, ignoring the clip window.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(clip) = self.clip {
            if clip.contains(Point::new(x, y)) {
                let index = (y as u32 * self.width + x as u32) as usize;
                self.color_buffer[index] = color;
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_grid(&mut self, spacing: i32, color: u32) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill a `width` x `height` rectangle with its top-left corner at (x, y).
    /// Only the part inside the clip window is written.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let Some(clip) = self.clip else {
            return;
        };
        let rect = ClipWindow::new(x, y, x.saturating_add(width - 1), y.saturating_add(height - 1));
        let Some(visible) = clip.intersect(&rect) else {
            return;
        };
        for row in visible.min_y()..=visible.max_y() {
            let start = (row as u32 * self.width + visible.min_x() as u32) as usize;
            let end = start + visible.width() as usize;
            self.color_buffer[start..end].fill(color);
        }
    }

    /// Outline a `width` x `height` rectangle with its top-left corner at (x, y).
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let x1 = x.saturating_add(width - 1);
        let y1 = y.saturating_add(height - 1);
        self.draw_hline(x, y, width, color);
        self.draw_hline(x, y1, width, color);
        self.draw_vline(x, y, height, color);
        self.draw_vline(x1, y, height, color);
    }

    /// Horizontal line of `length` pixels starting at (x, y).
    pub fn draw_hline(&mut self, x: i32, y: i32, length: i32, color: u32) -> bool {
        if length <= 0 {
            return false;
        }
        self.draw_line(
            Point::new(x, y),
            Point::new(x.saturating_add(length - 1), y),
            color,
        )
    }

    /// Vertical line of `length` pixels starting at (x, y).
    pub fn draw_vline(&mut self, x: i32, y: i32, length: i32, color: u32) -> bool {
        if length <= 0 {
            return false;
        }
        self.draw_line(
            Point::new(x, y),
            Point::new(x, y.saturating_add(length - 1)),
            color,
        )
    }

    /// Draws a line between two points, clipped to the active clip window.
    ///
    /// The segment is first clipped with Cohen–Sutherland; only the visible
    /// part is walked with Bresenham. Returns false if no part of the line
    /// is visible.
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: u32) -> bool {
        let Some(window) = self.clip else {
            return false;
        };

        let Some(visible) = clip(Segment::new(p0, p1), &window).into_option() else {
            log::trace!("line {p0:?} -> {p1:?} rejected by {window:?}");
            return false;
        };

        self.draw_line_bresenham(visible.p0, visible.p1, color);
        true
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Bresenham's algorithm efficiently determines which pixels to illuminate
    /// by using only integer arithmetic. It works by tracking an "error" term
    /// that represents the distance between the ideal line and the current pixel.
    ///
    /// For each step along the major axis we decide whether to also step along
    /// the minor axis based on accumulated error. When the error exceeds a
    /// threshold, we step diagonally instead of straight.
    ///
    /// Callers pass an already clipped segment; `set_pixel` still guards
    /// every write.
    #[inline]
    fn draw_line_bresenham(&mut self, p0: Point, p1: Point, color: u32) {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();

        let x_incr_direction = if p0.x < p1.x { 1 } else { -1 };
        let y_incr_direction = if p0.y < p1.y { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = p0.x;
        let mut y = p0.y;

        loop {
            self.set_pixel(x, y, color);

            if x == p1.x && y == p1.y {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can be true, resulting in a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Raw ARGB pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Get a mutable FrameBuffer view sharing this renderer's clip window.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        let clip = self.clip;
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height).with_clip_window(clip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = colors::WHITE;

    fn blank(width: u32, height: u32) -> Renderer {
        let mut r = Renderer::new(width, height);
        r.clear(colors::BLACK);
        r
    }

    fn lit(r: &Renderer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..r.height() as i32 {
            for x in 0..r.width() as i32 {
                if r.get_pixel(x, y) == Some(INK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn line_crossing_buffer_is_clipped_to_edges() {
        let mut r = blank(10, 10);
        assert!(r.draw_line(Point::new(-20, 4), Point::new(40, 4), INK));
        let pixels = lit(&r);
        assert_eq!(pixels.len(), 10);
        assert!(pixels.iter().all(|&(_, y)| y == 4));
    }

    #[test]
    fn rejected_line_draws_nothing() {
        let mut r = blank(10, 10);
        assert!(!r.draw_line(Point::new(-5, -5), Point::new(-1, -1), INK));
        assert!(lit(&r).is_empty());
    }

    #[test]
    fn single_pixel_line() {
        let mut r = blank(4, 4);
        assert!(r.draw_line(Point::new(2, 1), Point::new(2, 1), INK));
        assert_eq!(lit(&r), vec![(2, 1)]);
    }

    #[test]
    fn diagonal_line_inside_buffer() {
        let mut r = blank(5, 5);
        r.draw_line(Point::new(0, 0), Point::new(4, 4), INK);
        assert_eq!(lit(&r), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn nothing_is_written_outside_clip_window() {
        let mut r = blank(32, 32);
        let window = ClipWindow::new(8, 6, 20, 25);
        r.set_clip_window(window);

        let center = Point::new(14, 15);
        for i in -40..=40 {
            r.draw_line(Point::new(i * 3, -50), Point::new(-i * 2, 80), INK);
            r.draw_line(center, Point::new(100, i * 5), INK);
        }

        let pixels = lit(&r);
        assert!(!pixels.is_empty());
        assert!(pixels
            .iter()
            .all(|&(x, y)| window.contains(Point::new(x, y))));
    }

    #[test]
    fn clip_window_is_intersected_with_buffer() {
        let mut r = blank(10, 10);
        r.set_clip_window(ClipWindow::new(-5, 5, 50, 50));
        assert_eq!(r.clip_window(), Some(ClipWindow::new(0, 5, 9, 9)));

        r.set_clip_window(ClipWindow::new(20, 20, 30, 30));
        assert_eq!(r.clip_window(), None);
        assert!(!r.draw_line(Point::new(0, 0), Point::new(9, 9), INK));

        r.reset_clip_window();
        assert_eq!(r.clip_window(), Some(ClipWindow::from_size(10, 10)));
    }

    #[test]
    fn resize_keeps_requested_clip_window() {
        let mut r = blank(10, 10);
        r.set_clip_window(ClipWindow::new(2, 2, 30, 30));
        r.resize(20, 15);
        assert_eq!(r.clip_window(), Some(ClipWindow::new(2, 2, 19, 14)));
    }

    #[test]
    fn rect_outline_partially_offscreen() {
        let mut r = blank(6, 6);
        r.draw_rect_outline(-2, 1, 5, 3, INK);
        // Visible: top and bottom edges for x in 0..=2, right edge at x = 2.
        let pixels = lit(&r);
        assert_eq!(
            pixels,
            vec![(0, 1), (1, 1), (2, 1), (2, 2), (0, 3), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn fill_rect_respects_clip_window() {
        let mut r = blank(8, 8);
        r.set_clip_window(ClipWindow::new(0, 0, 3, 3));
        r.fill_rect(2, 2, 10, 10, INK);
        assert_eq!(lit(&r), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn zero_sized_shapes_are_ignored() {
        let mut r = blank(4, 4);
        r.draw_rect_outline(1, 1, 0, 2, INK);
        r.fill_rect(1, 1, 2, -1, INK);
        assert!(!r.draw_hline(0, 0, 0, INK));
        assert!(lit(&r).is_empty());
    }

    #[test]
    fn framebuffer_view_shares_clip_window() {
        let mut r = blank(6, 6);
        r.set_clip_window(ClipWindow::new(1, 1, 2, 2));
        let mut fb = r.as_framebuffer();
        fb.set_pixel(0, 0, INK);
        fb.set_pixel(1, 1, INK);
        assert_eq!(lit(&r), vec![(1, 1)]);
    }

    #[test]
    fn empty_renderer_draws_nothing() {
        let mut r = Renderer::new(0, 0);
        assert_eq!(r.clip_window(), None);
        assert!(!r.draw_line(Point::new(0, 0), Point::new(1, 1), INK));
        assert!(r.pixels().is_empty());
    }
}
