use std::convert::TryFrom;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::{color::Color, error::Error};

/// Row-major grid of packed colors with the origin at the top-left corner.
///
/// Each cell holds `Color::to_rgba32`: red in the low byte, alpha in the high
/// byte.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgba: u32) {
        self.pixels[y * self.width + x] = rgba;
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba32();
        for pixel in &mut self.pixels {
            *pixel = rgba;
        }
    }

    /// Copies the raster into an image buffer. Fails when either dimension
    /// does not fit the image's `u32` sizes.
    pub fn to_image(&self) -> Result<RgbaImage, Error> {
        let too_large = |_| Error::RasterTooLarge(self.width, self.height);
        let width = u32::try_from(self.width).map_err(too_large)?;
        let height = u32::try_from(self.height).map_err(too_large)?;

        Ok(ImageBuffer::from_fn(width, height, |x, y| {
            Rgba(self.get(x as usize, y as usize).to_le_bytes())
        }))
    }

    /// Encodes the raster, picking the format from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.to_image()?.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_bytes_follow_packing_order() {
        let mut raster = Raster::new(2, 1);
        raster.set(1, 0, Color::new(1.0, 0.0, 0.0).to_rgba32());
        raster.set(0, 0, Color::BLUE.to_rgba32());

        let image = raster.to_image().expect("small raster fits");

        assert_eq!(&Rgba([0, 0, 255, 255]), image.get_pixel(0, 0));
        assert_eq!(&Rgba([255, 0, 0, 255]), image.get_pixel(1, 0));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_raster_is_rejected() {
        let raster = Raster::new(u32::MAX as usize + 1, 0);

        assert!(matches!(raster.to_image(), Err(Error::RasterTooLarge(..))));
    }

    #[test]
    fn rows_are_contiguous() {
        let mut raster = Raster::new(3, 2);
        raster.set(0, 1, 7);

        assert_eq!(7, raster.pixels()[3]);
        assert_eq!(7, raster.get(0, 1));
    }

    #[test]
    fn clear_overwrites_every_cell() {
        let mut raster = Raster::new(4, 4);
        raster.clear(Color::WHITE);

        assert!(raster.pixels().iter().all(|&p| p == 0xffffffff));
    }
}
