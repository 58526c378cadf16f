use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use std::ops::Range;

/// Row-major frame store, allocated once per render.
///
/// Holds display-referred colours: the render loop writes each pixel
/// exactly once, already saturated and gamma encoded. Workers receive
/// disjoint row bands through [`Framebuffer::band_mut`], so concurrent
/// writes to the same pixel are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    resolution: Resolution,
    pixels: Vec<Colour>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![Colour::BLACK; resolution.pixel_count()],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Panics if the pixel lies outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        assert!(
            x < self.resolution.width() && y < self.resolution.height(),
            "pixel ({}, {}) outside {}x{} frame",
            x,
            y,
            self.resolution.width(),
            self.resolution.height()
        );

        self.pixels[y as usize * self.resolution.width() as usize + x as usize]
    }

    /// Mutable slice covering a contiguous range of whole rows.
    ///
    /// Non-overlapping row ranges yield non-overlapping slices. Panics if
    /// the range extends past the bottom of the frame.
    pub fn band_mut(&mut self, rows: Range<u32>) -> &mut [Colour] {
        let width = self.resolution.width() as usize;

        &mut self.pixels[rows.start as usize * width..rows.end as usize * width]
    }
}
