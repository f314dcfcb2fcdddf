//! Writing the color buffer to image files.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use super::renderer::Renderer;
use crate::colors;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

impl Renderer {
    /// Copy the color buffer into an RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.width() as usize;
        let pixels = self.pixels();
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            Rgba(colors::argb_to_rgba(pixels[y as usize * width + x as usize]))
        })
    }

    /// Save the color buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let image = self.to_rgba_image();
        image.save_with_format(path, image::ImageFormat::Png)?;
        log::info!(
            "wrote {}x{} image to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}
