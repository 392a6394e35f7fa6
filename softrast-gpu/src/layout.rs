// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vertex layout: how attributes are packed inside one vertex's stride.
//!
//! Built bgfx-style with `begin`/`add`/`end`; each added attribute is
//! assigned the current stride as its byte offset. Decode helpers read
//! attribute values out of raw vertex bytes (little-endian).

use byteorder::{ByteOrder, LittleEndian};
use glam::{Vec2, Vec3};

/// Attribute semantic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attrib {
    Position,
    Normal,
    Color0,
    TexCoord0,
}

impl Attrib {
    pub const COUNT: usize = 4;

    #[inline]
    const fn index(self) -> usize {
        match self {
            Attrib::Position => 0,
            Attrib::Normal => 1,
            Attrib::Color0 => 2,
            Attrib::TexCoord0 => 3,
        }
    }
}

/// Attribute element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribType {
    Uint8,
    Float,
}

impl AttribType {
    #[inline]
    pub const fn byte_size(self) -> u16 {
        match self {
            AttribType::Uint8 => 1,
            AttribType::Float => 4,
        }
    }
}

/// One declared attribute inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribDesc {
    pub ty: AttribType,
    pub num: u8,
    pub normalized: bool,
    pub offset: u16,
}

/// Packing description of one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    stride: u16,
    attribs: [Option<AttribDesc>; Attrib::COUNT],
}

impl VertexLayout {
    pub fn begin() -> Self {
        Self {
            stride: 0,
            attribs: [None; Attrib::COUNT],
        }
    }

    /// Declare the next attribute; its offset is the stride so far.
    pub fn add(mut self, attrib: Attrib, num: u8, ty: AttribType, normalized: bool) -> Self {
        debug_assert!(num >= 1 && num <= 4);
        debug_assert!(self.attribs[attrib.index()].is_none());
        self.attribs[attrib.index()] = Some(AttribDesc {
            ty,
            num,
            normalized,
            offset: self.stride,
        });
        self.stride += num as u16 * ty.byte_size();
        self
    }

    pub fn end(self) -> Self {
        debug_assert!(self.stride > 0);
        self
    }

    #[inline]
    pub fn stride(&self) -> u16 {
        self.stride
    }

    #[inline]
    pub fn attrib(&self, attrib: Attrib) -> Option<&AttribDesc> {
        self.attribs[attrib.index()].as_ref()
    }

    #[inline]
    pub fn has(&self, attrib: Attrib) -> bool {
        self.attribs[attrib.index()].is_some()
    }

    /// True when Position is declared as exactly 3 non-normalized floats,
    /// the only position encoding the rasterizer accepts.
    pub fn position_is_vec3_f32(&self) -> bool {
        matches!(
            self.attrib(Attrib::Position),
            Some(desc) if desc.ty == AttribType::Float && desc.num == 3 && !desc.normalized
        )
    }

    fn expect_attrib(&self, attrib: Attrib) -> &AttribDesc {
        match self.attrib(attrib) {
            Some(desc) => desc,
            None => panic!("vertex layout has no {attrib:?} attribute"),
        }
    }

    /// Read a 3-float attribute from one vertex's bytes.
    pub fn attr_vec3_f32(&self, vertex: &[u8], attrib: Attrib) -> Vec3 {
        let desc = self.expect_attrib(attrib);
        debug_assert_eq!(desc.ty, AttribType::Float);
        debug_assert_eq!(desc.num, 3);
        let at = desc.offset as usize;
        Vec3::new(
            LittleEndian::read_f32(&vertex[at..]),
            LittleEndian::read_f32(&vertex[at + 4..]),
            LittleEndian::read_f32(&vertex[at + 8..]),
        )
    }

    /// Read a 2-float attribute from one vertex's bytes.
    pub fn attr_vec2_f32(&self, vertex: &[u8], attrib: Attrib) -> Vec2 {
        let desc = self.expect_attrib(attrib);
        debug_assert_eq!(desc.ty, AttribType::Float);
        debug_assert_eq!(desc.num, 2);
        let at = desc.offset as usize;
        Vec2::new(
            LittleEndian::read_f32(&vertex[at..]),
            LittleEndian::read_f32(&vertex[at + 4..]),
        )
    }

    /// Read a 3-byte attribute from one vertex's bytes.
    pub fn attr_rgb_u8(&self, vertex: &[u8], attrib: Attrib) -> [u8; 3] {
        let desc = self.expect_attrib(attrib);
        debug_assert_eq!(desc.ty, AttribType::Uint8);
        debug_assert_eq!(desc.num, 3);
        let at = desc.offset as usize;
        [vertex[at], vertex[at + 1], vertex[at + 2]]
    }
}
