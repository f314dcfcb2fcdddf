//! Line clipping against axis-aligned windows.
//!
//! This module implements the Cohen–Sutherland algorithm in pixel space:
//!
//! - [`outcode`]: Region codes and point classification.
//! - [`window`]: The inclusive clip rectangle.
//! - [`line`]: The iterative clipping loop.
//!
//! Line drawing in [`crate::render`] runs every segment through [`clip`]
//! before walking pixels, so only in-window pixels are ever plotted.

pub mod line;
pub mod outcode;
pub mod window;

pub use line::{clip, clip_in_place, LineClip};
pub use outcode::{classify, Outcode};
pub use window::ClipWindow;
