//! Pixel-space line clipping for a CPU software renderer.
//!
//! The core of this crate is a Cohen–Sutherland line clipper working on
//! integer pixel coordinates. A small renderer built on top of it runs every
//! line through the clipper before walking pixels, so nothing is ever
//! plotted outside the active clip window.
//!
//! # Quick Start
//!
//! ```
//! use pixclip::prelude::*;
//!
//! let window = ClipWindow::new(0, 0, 10, 10);
//! let result = clip(Segment::from_coords(5, -5, 5, 15), &window);
//! assert_eq!(result.into_option(), Some(Segment::from_coords(5, 0, 5, 10)));
//!
//! let mut renderer = Renderer::new(64, 64);
//! renderer.set_clip_window(ClipWindow::new(8, 8, 55, 55));
//! renderer.draw_line(Point::new(-100, 0), Point::new(100, 64), colors::WHITE);
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod math;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{classify, clip, clip_in_place, ClipWindow, LineClip, Outcode};
pub use math::point::{Point, Segment};
pub use render::{ExportError, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use pixclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{classify, clip, clip_in_place, ClipWindow, LineClip, Outcode};

    // Math
    pub use crate::math::point::{Point, Segment};

    // Rendering
    pub use crate::colors;
    pub use crate::render::{ExportError, FrameBuffer, Renderer};
}
