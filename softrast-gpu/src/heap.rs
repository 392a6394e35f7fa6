// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource storage behind the engine facade.
//!
//! Every GPU-style object lives in a pool here and is addressed by a typed
//! handle. Vertex and index buffers copy their bytes into the shared
//! [`BufferTable`] arena; textures own their pixel bytes inline so render
//! targets can be borrowed independently of the buffer arena during a
//! frame.

use log::{debug, trace};
use softrast_common::VERTEX_INDEX_SIZE;

use crate::commands::RenderPass;
use crate::handle::{
    BufferHandle, FrameBufferHandle, IndexBufferHandle, Pool, ProgramHandle, ShaderHandle,
    TextureHandle, UniformHandle, VertexBufferHandle, ViewId,
};
use crate::image::{ImageView, ImageViewMut, TextureFormat};
use crate::layout::VertexLayout;
use crate::memory::BufferTable;
use crate::shader::{Program, Shader, UniformType};
use crate::uniform::UniformStore;

/// 2D image with inline pixel storage.
#[derive(Debug)]
pub struct Texture {
    pub width: u16,
    pub height: u16,
    pub format: TextureFormat,
    pub bytes: Vec<u8>,
}

impl Texture {
    pub fn new(width: u16, height: u16, format: TextureFormat) -> Self {
        let len = width as usize * height as usize * format.bytes_per_pixel() as usize;
        Self {
            width,
            height,
            format,
            bytes: vec![0; len],
        }
    }

    pub fn view(&self) -> ImageView<'_> {
        ImageView::new(
            self.width,
            self.height,
            self.format.bytes_per_pixel(),
            &self.bytes,
        )
    }

    pub fn view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut::new(
            self.width,
            self.height,
            self.format.bytes_per_pixel(),
            &mut self.bytes,
        )
    }
}

/// Color target with an optional depth attachment. The framebuffer owns
/// both textures; destroying it destroys them.
#[derive(Debug, Clone, Copy)]
pub struct FrameBuffer {
    pub color: TextureHandle,
    pub depth: Option<TextureHandle>,
}

/// Vertex bytes in the arena plus their layout.
#[derive(Debug)]
pub struct VertexBuffer {
    pub buffer: BufferHandle,
    pub layout: VertexLayout,
}

/// Triangle-list `u16` indices in the arena.
#[derive(Debug)]
pub struct IndexBuffer {
    pub buffer: BufferHandle,
}

/// All engine-owned resources.
#[derive(Debug)]
pub struct ResourceHeap {
    pub buffers: BufferTable,
    pub textures: Pool<Texture>,
    pub framebuffers: Pool<FrameBuffer>,
    pub vertex_buffers: Pool<VertexBuffer>,
    pub index_buffers: Pool<IndexBuffer>,
    pub shaders: Pool<Shader>,
    pub programs: Pool<Program>,
    pub uniforms: UniformStore,
    /// Indexed by [`ViewId`]; only the default view 0 is ever created.
    pub render_passes: Vec<RenderPass>,
}

impl ResourceHeap {
    pub fn new() -> Self {
        Self {
            buffers: BufferTable::new(),
            textures: Pool::new(),
            framebuffers: Pool::new(),
            vertex_buffers: Pool::new(),
            index_buffers: Pool::new(),
            shaders: Pool::new(),
            programs: Pool::new(),
            uniforms: UniformStore::new(),
            render_passes: vec![RenderPass::new()],
        }
    }

    pub fn create_texture(&mut self, width: u16, height: u16, format: TextureFormat) -> TextureHandle {
        debug_assert!(width > 0 && height > 0);
        let handle = TextureHandle(self.textures.insert(Texture::new(width, height, format)));
        trace!("created texture {handle:?}: {width}x{height} {format:?}");
        handle
    }

    pub fn destroy_texture(&mut self, handle: TextureHandle) {
        self.textures.remove(handle.0);
    }

    pub fn create_frame_buffer(&mut self, width: u16, height: u16) -> FrameBufferHandle {
        self.create_frame_buffer_inner(width, height, false)
    }

    pub fn create_frame_buffer_with_depth(&mut self, width: u16, height: u16) -> FrameBufferHandle {
        self.create_frame_buffer_inner(width, height, true)
    }

    fn create_frame_buffer_inner(
        &mut self,
        width: u16,
        height: u16,
        with_depth: bool,
    ) -> FrameBufferHandle {
        let color = self.create_texture(width, height, TextureFormat::Rgb8);
        let depth = with_depth.then(|| self.create_texture(width, height, TextureFormat::D32F));
        let handle = FrameBufferHandle(self.framebuffers.insert(FrameBuffer { color, depth }));
        debug!("created framebuffer {handle:?}: {width}x{height}, depth: {with_depth}");
        handle
    }

    pub fn destroy_frame_buffer(&mut self, handle: FrameBufferHandle) {
        let framebuffer = self.framebuffers.remove(handle.0);
        self.destroy_texture(framebuffer.color);
        if let Some(depth) = framebuffer.depth {
            self.destroy_texture(depth);
        }
    }

    /// Color attachment of a framebuffer.
    pub fn texture_of(&self, handle: FrameBufferHandle) -> TextureHandle {
        self.framebuffers[handle.0].color
    }

    /// Copy `bytes` into the arena. The length must be a whole number of
    /// vertices and even, matching the index granularity.
    pub fn create_vertex_buffer(&mut self, bytes: &[u8], layout: &VertexLayout) -> VertexBufferHandle {
        let stride = layout.stride() as usize;
        assert!(stride > 0);
        assert_eq!(bytes.len() % stride, 0);
        assert_eq!(bytes.len() % 2, 0);
        let buffer = self.buffers.alloc(bytes.len() as u32);
        self.buffers.bytes_mut(buffer).copy_from_slice(bytes);
        let handle = VertexBufferHandle(self.vertex_buffers.insert(VertexBuffer {
            buffer,
            layout: layout.clone(),
        }));
        trace!("created vertex buffer {handle:?}: {} bytes, stride {stride}", bytes.len());
        handle
    }

    pub fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle) {
        let vertex_buffer = self.vertex_buffers.remove(handle.0);
        self.buffers.free(vertex_buffer.buffer);
    }

    pub fn create_index_buffer(&mut self, bytes: &[u8]) -> IndexBufferHandle {
        assert_eq!(bytes.len() % VERTEX_INDEX_SIZE, 0);
        let buffer = self.buffers.alloc(bytes.len() as u32);
        self.buffers.bytes_mut(buffer).copy_from_slice(bytes);
        let handle = IndexBufferHandle(self.index_buffers.insert(IndexBuffer { buffer }));
        trace!("created index buffer {handle:?}: {} bytes", bytes.len());
        handle
    }

    pub fn destroy_index_buffer(&mut self, handle: IndexBufferHandle) {
        let index_buffer = self.index_buffers.remove(handle.0);
        self.buffers.free(index_buffer.buffer);
    }

    pub fn create_shader(&mut self, shader: Shader) -> ShaderHandle {
        ShaderHandle(self.shaders.insert(shader))
    }

    pub fn destroy_shader(&mut self, handle: ShaderHandle) {
        self.shaders.remove(handle.0);
    }

    pub fn create_program(&mut self, vertex: ShaderHandle, fragment: ShaderHandle) -> ProgramHandle {
        debug_assert!(matches!(self.shaders[vertex.0], Shader::Vertex(_)));
        debug_assert!(matches!(self.shaders[fragment.0], Shader::Fragment(_)));
        ProgramHandle(self.programs.insert(Program { vertex, fragment }))
    }

    pub fn destroy_program(&mut self, handle: ProgramHandle) {
        self.programs.remove(handle.0);
    }

    pub fn create_uniform(&mut self, name: &str) -> UniformHandle {
        self.uniforms.create(name, UniformType::Vec4)
    }

    pub fn destroy_uniform(&mut self, handle: UniformHandle) {
        self.uniforms.destroy(handle);
    }

    /// Pass for a view id; only the default view 0 has one. Addressing
    /// any other view fails here, at the offending call.
    pub fn pass_mut(&mut self, view: ViewId) -> &mut RenderPass {
        debug_assert!(
            (view as usize) < self.render_passes.len(),
            "no render pass for view {view}"
        );
        &mut self.render_passes[view as usize]
    }

    /// Destruction-order contract: everything except standalone textures
    /// must be destroyed before shutdown.
    pub fn assert_drained(&self) {
        assert!(self.vertex_buffers.is_empty(), "leaked vertex buffers");
        assert!(self.index_buffers.is_empty(), "leaked index buffers");
        assert!(self.shaders.is_empty(), "leaked shaders");
        assert!(self.programs.is_empty(), "leaked programs");
        assert!(self.uniforms.is_empty(), "leaked uniforms");
        assert!(self.framebuffers.is_empty(), "leaked framebuffers");
        assert_eq!(self.render_passes.len(), 1, "leaked render passes");
    }
}

impl Default for ResourceHeap {
    fn default() -> Self {
        Self::new()
    }
}
