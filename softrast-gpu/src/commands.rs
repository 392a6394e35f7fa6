// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Draw-call recording.
//!
//! `set_*` calls accumulate into a [`TemporaryStack`]; submit snapshots the
//! stack into a [`DrawCall`] appended to the addressed [`RenderPass`], then
//! resets the stack. Vertex uniforms are resolved into the snapshot at
//! submit time, so later uniform writes do not reach already-recorded
//! commands.

use glam::{Mat4, Vec4};
use softrast_common::Rect;

use crate::handle::{FrameBufferHandle, IndexBufferHandle, ProgramHandle, VertexBufferHandle};
use crate::state::{ClearState, RenderState};

/// One recorded rasterization request.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub program: ProgramHandle,
    pub transform: Mat4,
    pub index_buffer: IndexBufferHandle,
    pub vertex_buffer: VertexBufferHandle,
    /// Vertex-shader uniform values in declaration order, copied at submit.
    pub vertex_uniforms: Vec<Vec4>,
    pub state: RenderState,
    pub tint: u32,
}

/// Mutable "current command" accumulator between submits.
#[derive(Debug, Clone)]
pub struct TemporaryStack {
    pub transform: Mat4,
    pub vertex_buffer: VertexBufferHandle,
    pub index_buffer: IndexBufferHandle,
    pub state: RenderState,
    pub tint: u32,
}

impl TemporaryStack {
    pub fn new() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            vertex_buffer: VertexBufferHandle::INVALID,
            index_buffer: IndexBufferHandle::INVALID,
            state: RenderState::default(),
            tint: u32::MAX,
        }
    }

    /// Reset every field to its sentinel.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Capture the stack into a command for `program`.
    pub fn snapshot(&self, program: ProgramHandle, vertex_uniforms: Vec<Vec4>) -> DrawCall {
        DrawCall {
            program,
            transform: self.transform,
            index_buffer: self.index_buffer,
            vertex_buffer: self.vertex_buffer,
            vertex_uniforms,
            state: self.state,
            tint: self.tint,
        }
    }
}

impl Default for TemporaryStack {
    fn default() -> Self {
        Self::new()
    }
}

/// A render target plus everything queued against it for this frame.
#[derive(Debug)]
pub struct RenderPass {
    pub framebuffer: FrameBufferHandle,
    pub rect: Rect,
    pub clear: ClearState,
    pub view: Mat4,
    pub proj: Mat4,
    pub commands: Vec<DrawCall>,
}

impl RenderPass {
    pub fn new() -> Self {
        Self {
            framebuffer: FrameBufferHandle::INVALID,
            rect: Rect::default(),
            clear: ClearState::default(),
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            commands: Vec::new(),
        }
    }
}

impl Default for RenderPass {
    fn default() -> Self {
        Self::new()
    }
}
