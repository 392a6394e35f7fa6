// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render and clear state.
//!
//! State is plain structs rather than packed flag words; the one derived
//! rule is that depth reading is implied by either a depth test or depth
//! writing.

/// Back-face culling mode, classified from screen-space winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    None,
    Clockwise,
    CounterClockwise,
}

/// Depth comparison applied when resolving overlapping pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTest {
    None,
    Less,
}

/// Per-draw-call pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub cull: CullMode,
    pub depth_test: DepthTest,
    pub depth_write: bool,
}

impl RenderState {
    /// Whether the depth buffer is consulted at all this draw call.
    #[inline]
    pub fn depth_read(&self) -> bool {
        self.depth_write || self.depth_test != DepthTest::None
    }
}

impl Default for RenderState {
    /// Matches the default program state: cull counter-clockwise, test
    /// less, write depth.
    fn default() -> Self {
        Self {
            cull: CullMode::CounterClockwise,
            depth_test: DepthTest::Less,
            depth_write: true,
        }
    }
}

/// Which target planes a pass clears before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearFlags {
    pub color: bool,
    pub depth: bool,
}

impl ClearFlags {
    pub const NONE: Self = Self {
        color: false,
        depth: false,
    };
    pub const COLOR: Self = Self {
        color: true,
        depth: false,
    };
    pub const DEPTH: Self = Self {
        color: false,
        depth: true,
    };
    pub const COLOR_AND_DEPTH: Self = Self {
        color: true,
        depth: true,
    };
}

/// Clear values of one render pass. The color is packed `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearState {
    pub flags: ClearFlags,
    pub rgba: u32,
    pub depth: f32,
}

impl ClearState {
    pub const DEFAULT_RGBA: u32 = 0x0000_00FF;
    pub const DEFAULT_DEPTH: f32 = 1.0;

    /// The r, g, b bytes of the packed clear color.
    #[inline]
    pub fn color_bytes(&self) -> [u8; 3] {
        [
            (self.rgba >> 24) as u8,
            (self.rgba >> 16) as u8,
            (self.rgba >> 8) as u8,
        ]
    }
}

impl Default for ClearState {
    fn default() -> Self {
        Self {
            flags: ClearFlags::NONE,
            rgba: Self::DEFAULT_RGBA,
            depth: Self::DEFAULT_DEPTH,
        }
    }
}
