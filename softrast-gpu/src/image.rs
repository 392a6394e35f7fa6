// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pixel formats and raw image views.
//!
//! An image view is a borrowed window over a byte slice with row stride
//! `bytes_per_pixel * width`. Pixel access is by `(row, col)` or by flat
//! pixel index; both are debug-assert bounds-checked.

/// Pixel storage format of a texture.
///
/// | Format | Bytes per pixel | Payload        |
/// |--------|-----------------|----------------|
/// | R8     | 1               | u8             |
/// | Rg8    | 2               | 2 x u8         |
/// | Rgb8   | 3               | 3 x u8         |
/// | Rgba8  | 4               | 4 x u8         |
/// | D32F   | 4               | little-endian f32 depth |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
    D32F,
}

impl TextureFormat {
    #[inline]
    pub const fn bytes_per_pixel(self) -> u8 {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::Rg8 => 2,
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
            TextureFormat::D32F => 4,
        }
    }

    #[inline]
    pub const fn is_depth(self) -> bool {
        matches!(self, TextureFormat::D32F)
    }
}

/// Read-only pixel view over borrowed bytes.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    pub width: u16,
    pub height: u16,
    pub bytes_per_pixel: u8,
    bytes: &'a [u8],
}

impl<'a> ImageView<'a> {
    pub fn new(width: u16, height: u16, bytes_per_pixel: u8, bytes: &'a [u8]) -> Self {
        debug_assert!(
            bytes.len() >= width as usize * height as usize * bytes_per_pixel as usize
        );
        Self {
            width,
            height,
            bytes_per_pixel,
            bytes,
        }
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.bytes_per_pixel as usize * self.width as usize
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn index(&self, pixel: usize) -> usize {
        debug_assert!(pixel < self.pixel_count());
        pixel * self.bytes_per_pixel as usize
    }

    /// Bytes of one pixel by flat index.
    #[inline]
    pub fn pixel(&self, pixel: usize) -> &[u8] {
        let at = self.index(pixel);
        &self.bytes[at..at + self.bytes_per_pixel as usize]
    }

    /// Bytes of one pixel by row and column.
    #[inline]
    pub fn pixel_at(&self, row: usize, col: usize) -> &[u8] {
        debug_assert!(row < self.height as usize);
        debug_assert!(col < self.width as usize);
        self.pixel(row * self.width as usize + col)
    }

    /// Nearest-pixel stretch into a target of any size. The target format
    /// must be at least as wide as the source; only the source's bytes per
    /// pixel are written, trailing target channels keep their value.
    pub fn copy_stretch_to(&self, target: &mut ImageViewMut<'_>) {
        assert!(target.bytes_per_pixel >= self.bytes_per_pixel);
        let bpp = self.bytes_per_pixel as usize;
        for y in 0..target.height as usize {
            let from_y = y * self.height as usize / target.height as usize;
            for x in 0..target.width as usize {
                let from_x = x * self.width as usize / target.width as usize;
                let src = self.pixel_at(from_y, from_x);
                let dst = target.pixel_mut(y * target.width as usize + x);
                dst[..bpp].copy_from_slice(src);
            }
        }
    }
}

/// Mutable pixel view over borrowed bytes.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    pub width: u16,
    pub height: u16,
    pub bytes_per_pixel: u8,
    bytes: &'a mut [u8],
}

impl<'a> ImageViewMut<'a> {
    pub fn new(width: u16, height: u16, bytes_per_pixel: u8, bytes: &'a mut [u8]) -> Self {
        debug_assert!(
            bytes.len() >= width as usize * height as usize * bytes_per_pixel as usize
        );
        Self {
            width,
            height,
            bytes_per_pixel,
            bytes,
        }
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView::new(self.width, self.height, self.bytes_per_pixel, self.bytes)
    }

    #[inline]
    pub fn pixel(&self, pixel: usize) -> &[u8] {
        debug_assert!(pixel < self.pixel_count());
        let at = pixel * self.bytes_per_pixel as usize;
        &self.bytes[at..at + self.bytes_per_pixel as usize]
    }

    #[inline]
    pub fn pixel_mut(&mut self, pixel: usize) -> &mut [u8] {
        debug_assert!(pixel < self.pixel_count());
        let at = pixel * self.bytes_per_pixel as usize;
        &mut self.bytes[at..at + self.bytes_per_pixel as usize]
    }

    /// Overwrite one pixel. The value length must match the pixel size.
    #[inline]
    pub fn set_pixel(&mut self, pixel: usize, value: &[u8]) {
        debug_assert_eq!(value.len(), self.bytes_per_pixel as usize);
        self.pixel_mut(pixel).copy_from_slice(value);
    }

    /// Overwrite every pixel with the same value.
    pub fn fill(&mut self, value: &[u8]) {
        debug_assert_eq!(value.len(), self.bytes_per_pixel as usize);
        for chunk in self
            .bytes
            .chunks_exact_mut(self.bytes_per_pixel as usize)
            .take(self.width as usize * self.height as usize)
        {
            chunk.copy_from_slice(value);
        }
    }
}
