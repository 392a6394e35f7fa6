// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bytemuck::{Pod, Zeroable};
use glam::{I16Vec2, U16Vec2};

/// Signed screen-space pixel coordinate.
pub type ScreenCoord = i16;

/// Vertex index width used by every index buffer in the engine.
pub type VertexIndex = u16;

/// Byte size of one vertex index.
pub const VERTEX_INDEX_SIZE: usize = std::mem::size_of::<VertexIndex>();

/// Raw resource handle value.
pub type RawHandle = u16;

/// Invalid handle sentinel.
pub const INVALID_HANDLE: RawHandle = RawHandle::MAX;

/// 24-bit color pixel, the engine's color render target format.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Screen-space rectangle as origin point plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub point: I16Vec2,
    pub extent: U16Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: ScreenCoord, y: ScreenCoord, width: u16, height: u16) -> Self {
        Self {
            point: I16Vec2::new(x, y),
            extent: U16Vec2::new(width, height),
        }
    }

    /// Exclusive far corner (point + extent).
    #[inline]
    pub fn max_point(&self) -> I16Vec2 {
        self.point + self.extent.as_i16vec2()
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.extent.x as usize * self.extent.y as usize
    }
}

/// Align a value up to the given power-of-two alignment.
#[inline]
pub const fn align_up(value: u32, alignment: u32) -> u32 {
    let mask = alignment - 1;
    (value + mask) & !mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), 0);
        assert_eq!(align_up(1, 8), 8);
        assert_eq!(align_up(8, 8), 8);
        assert_eq!(align_up(13, 4), 16);
    }

    #[test]
    fn test_rgb8_is_three_bytes() {
        assert_eq!(std::mem::size_of::<Rgb8>(), 3);
    }

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(2, 3, 4, 5);
        assert_eq!(rect.point, I16Vec2::new(2, 3));
        assert_eq!(rect.max_point(), I16Vec2::new(6, 8));
        assert_eq!(rect.pixel_count(), 20);
    }
}
