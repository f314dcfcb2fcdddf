//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a clipped view into a color buffer. Every write is tested against
//! the view's clip window, so drawing code can never touch pixels outside the
//! active region.

use crate::clipper::ClipWindow;

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer, its dimensions and the
/// active clip window together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
    clip: Option<ClipWindow>,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view clipped to the whole buffer.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        let clip = (width > 0 && height > 0).then(|| ClipWindow::from_size(width, height));
        Self {
            color_buffer,
            width,
            height,
            clip,
        }
    }

    /// Restrict writes to `window`. The window is intersected with the buffer
    /// bounds; `None` or a window outside the buffer blocks every write.
    pub fn with_clip_window(mut self, window: Option<ClipWindow>) -> Self {
        self.clip = match (self.clip, window) {
            (Some(bounds), Some(window)) => bounds.intersect(&window),
            _ => None,
        };
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The region writes are confined to, or `None` if nothing is writable.
    pub fn clip_window(&self) -> Option<ClipWindow> {
        self.clip
    }

    /// Set a pixel at (x, y).
    /// Silently ignores coordinates outside the clip window.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        let Some(clip) = self.clip else {
            return;
        };
        if x >= clip.min_x() && x <= clip.max_x() && y >= clip.min_y() && y <= clip.max_y() {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    ///
    /// Reads are bounded by the buffer, not the clip window.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_buffer_are_ignored() {
        let mut buffer = vec![0u32; 4 * 3];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 3);
        fb.set_pixel(-1, 0, 7);
        fb.set_pixel(4, 0, 7);
        fb.set_pixel(0, 3, 7);
        fb.set_pixel(3, 2, 9);
        assert_eq!(fb.get_pixel(3, 2), Some(9));
        assert_eq!(fb.get_pixel(4, 2), None);
        assert_eq!(buffer.iter().filter(|&&c| c != 0).count(), 1);
    }

    #[test]
    fn clip_window_restricts_writes() {
        let mut buffer = vec![0u32; 5 * 5];
        let mut fb = FrameBuffer::new(&mut buffer, 5, 5)
            .with_clip_window(Some(ClipWindow::new(1, 1, 2, 2)));
        for y in 0..5 {
            for x in 0..5 {
                fb.set_pixel(x, y, 1);
            }
        }
        assert_eq!(fb.clip_window(), Some(ClipWindow::new(1, 1, 2, 2)));
        assert_eq!(buffer.iter().sum::<u32>(), 4);
    }

    #[test]
    fn disjoint_clip_window_blocks_everything() {
        let mut buffer = vec![0u32; 3 * 3];
        let mut fb = FrameBuffer::new(&mut buffer, 3, 3)
            .with_clip_window(Some(ClipWindow::new(10, 10, 20, 20)));
        assert_eq!(fb.clip_window(), None);
        fb.set_pixel(1, 1, 5);
        assert_eq!(fb.get_pixel(1, 1), Some(0));
    }
}
