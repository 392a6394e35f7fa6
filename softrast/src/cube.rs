// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cube mesh: 8 corner vertices with per-corner colors, 12 triangles.

use bytemuck::{Pod, Zeroable};
use softrast_gpu::{Attrib, AttribType, VertexLayout};

/// Interleaved position + color vertex, tightly packed to match the
/// declared layout stride.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 3],
}

pub fn vertex_layout() -> VertexLayout {
    VertexLayout::begin()
        .add(Attrib::Position, 3, AttribType::Float, false)
        .add(Attrib::Color0, 3, AttribType::Uint8, true)
        .end()
}

const fn v(x: f32, y: f32, z: f32, color: [u8; 3]) -> Vertex {
    Vertex {
        position: [x, y, z],
        color,
    }
}

pub const VERTICES: [Vertex; 8] = [
    v(-0.5, -0.5, -0.5, [0, 0, 0]),
    v(0.5, -0.5, -0.5, [255, 0, 0]),
    v(0.5, 0.5, -0.5, [255, 255, 0]),
    v(-0.5, 0.5, -0.5, [0, 255, 0]),
    v(-0.5, -0.5, 0.5, [0, 0, 255]),
    v(0.5, -0.5, 0.5, [255, 0, 255]),
    v(0.5, 0.5, 0.5, [255, 255, 255]),
    v(-0.5, 0.5, 0.5, [0, 255, 255]),
];

pub const INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // -z
    4, 6, 5, 4, 7, 6, // +z
    0, 3, 7, 0, 7, 4, // -x
    1, 5, 6, 1, 6, 2, // +x
    3, 2, 6, 3, 6, 7, // +y
    0, 4, 5, 0, 5, 1, // -y
];
