//! Software rendering into a CPU color buffer.
//!
//! - [`Renderer`]: Owns the color buffer and the active clip window.
//! - [`FrameBuffer`]: Borrowed, clipped view for code that only needs pixels.
//! - [`export`]: PNG output of the color buffer.

pub mod export;
mod framebuffer;
mod renderer;

pub use export::ExportError;
pub use framebuffer::FrameBuffer;
pub use renderer::{Renderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
