//! RGBA pixel buffer and PNG serialization.

use std::path::Path;

use image::{ImageError, ImageFormat, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// A width x height RGBA image owned by the pipeline for a single run.
///
/// The renderer fills every pixel, the overlay mutates it in place, and
/// `save_png` consumes it read-only at the end.
#[derive(Debug, Clone)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a zeroed buffer of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// In-bounds write. Callers guarantee `x < width` and `y < height`.
    pub fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.img.put_pixel(x, y, color);
    }

    /// Write that silently skips coordinates outside the buffer.
    ///
    /// The overlay stamps random offsets around an anchor; offsets landing
    /// off the image are dropped, not clamped.
    pub fn stamp(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Raw RGBA bytes, row-major.
    pub fn raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    /// Encode the buffer as PNG at `path`, creating or truncating the file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.img
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(io) => Error::Io(format!("{}: {io}", path.display())),
                other => Error::Encode(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn stamp_skips_out_of_bounds_writes() {
        let mut canvas = Canvas::new(4, 4);
        canvas.stamp(-1, 0, palette::WHITE);
        canvas.stamp(0, -1, palette::WHITE);
        canvas.stamp(4, 0, palette::WHITE);
        canvas.stamp(0, 4, palette::WHITE);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Rgba([0, 0, 0, 0]));
            }
        }
        canvas.stamp(3, 3, palette::WHITE);
        assert_eq!(canvas.pixel(3, 3), palette::WHITE);
    }

    #[test]
    fn save_png_produces_a_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");

        let mut canvas = Canvas::new(3, 2);
        canvas.put(0, 0, palette::PALETTE[0]);
        canvas.put(2, 1, palette::WHITE);
        canvas.save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(*decoded.get_pixel(0, 0), palette::PALETTE[0]);
        assert_eq!(*decoded.get_pixel(2, 1), palette::WHITE);
    }

    #[test]
    fn save_png_into_missing_directory_is_an_io_error() {
        let canvas = Canvas::new(1, 1);
        let err = canvas
            .save_png(Path::new("/nonexistent-dir/out.png"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
    }
}
