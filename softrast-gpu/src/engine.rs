// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The engine facade.
//!
//! [`Engine`] owns the resource heap, the rasterizer scratch, and the
//! temporary command stack, and exposes the whole public surface: resource
//! creation and destruction, `set_*` recording calls, `submit`, and
//! `frame`. All rendering is synchronous; `frame` runs every queued
//! command on the calling thread and leaves the results in the
//! framebuffer textures.

use glam::{Mat4, Vec4};
use log::{debug, info, trace};
use softrast_common::Rect;

use crate::commands::TemporaryStack;
use crate::handle::{
    BufferHandle, FrameBufferHandle, IndexBufferHandle, ProgramHandle, ShaderHandle,
    TextureHandle, UniformHandle, VertexBufferHandle, ViewId,
};
use crate::heap::ResourceHeap;
use crate::image::{ImageView, TextureFormat};
use crate::layout::VertexLayout;
use crate::rasterizer::{DrawInput, Rasterizer};
use crate::shader::Shader;
use crate::state::{ClearFlags, ClearState, RenderState};

pub struct Engine {
    heap: ResourceHeap,
    raster: Rasterizer,
    stack: TemporaryStack,
}

impl Engine {
    pub fn new() -> Self {
        info!("software rasterizer engine up");
        Self {
            heap: ResourceHeap::new(),
            raster: Rasterizer::new(),
            stack: TemporaryStack::new(),
        }
    }

    /// Tear the engine down. Everything except standalone textures must
    /// already be destroyed; the drop check asserts the heap is drained.
    pub fn shutdown(self) {
        debug!("engine shutting down");
    }

    // Raw buffer memory.

    /// Allocate a zeroed arena buffer.
    pub fn alloc(&mut self, size: u32) -> BufferHandle {
        self.heap.buffers.alloc(size)
    }

    /// Allocate a zeroed arena buffer at a power-of-two alignment.
    pub fn alloc_aligned(&mut self, size: u32, alignment: u32) -> BufferHandle {
        self.heap.buffers.alloc_aligned(size, alignment)
    }

    /// Register caller-provided bytes as a buffer without copying into the
    /// arena.
    pub fn make_ref(&mut self, bytes: Vec<u8>) -> BufferHandle {
        self.heap.buffers.make_ref(bytes)
    }

    pub fn free_buffer(&mut self, handle: BufferHandle) {
        self.heap.buffers.free(handle);
    }

    pub fn buffer(&self, handle: BufferHandle) -> &[u8] {
        self.heap.buffers.bytes(handle)
    }

    pub fn buffer_mut(&mut self, handle: BufferHandle) -> &mut [u8] {
        self.heap.buffers.bytes_mut(handle)
    }

    // Resources.

    pub fn create_texture_2d(&mut self, width: u16, height: u16, format: TextureFormat) -> TextureHandle {
        self.heap.create_texture(width, height, format)
    }

    pub fn destroy_texture(&mut self, handle: TextureHandle) {
        self.heap.destroy_texture(handle);
    }

    /// Create a color-only render target.
    pub fn create_frame_buffer(&mut self, width: u16, height: u16) -> FrameBufferHandle {
        self.heap.create_frame_buffer(width, height)
    }

    /// Create a render target with a `D32F` depth attachment.
    pub fn create_frame_buffer_with_depth(&mut self, width: u16, height: u16) -> FrameBufferHandle {
        self.heap.create_frame_buffer_with_depth(width, height)
    }

    pub fn destroy_frame_buffer(&mut self, handle: FrameBufferHandle) {
        self.heap.destroy_frame_buffer(handle);
    }

    /// Color attachment of a framebuffer.
    pub fn texture_of(&self, handle: FrameBufferHandle) -> TextureHandle {
        self.heap.texture_of(handle)
    }

    pub fn create_vertex_buffer(&mut self, bytes: &[u8], layout: &VertexLayout) -> VertexBufferHandle {
        self.heap.create_vertex_buffer(bytes, layout)
    }

    pub fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle) {
        self.heap.destroy_vertex_buffer(handle);
    }

    pub fn create_index_buffer(&mut self, bytes: &[u8]) -> IndexBufferHandle {
        self.heap.create_index_buffer(bytes)
    }

    pub fn destroy_index_buffer(&mut self, handle: IndexBufferHandle) {
        self.heap.destroy_index_buffer(handle);
    }

    pub fn create_shader(&mut self, shader: Shader) -> ShaderHandle {
        self.heap.create_shader(shader)
    }

    pub fn destroy_shader(&mut self, handle: ShaderHandle) {
        self.heap.destroy_shader(handle);
    }

    pub fn create_program(&mut self, vertex: ShaderHandle, fragment: ShaderHandle) -> ProgramHandle {
        self.heap.create_program(vertex, fragment)
    }

    pub fn destroy_program(&mut self, handle: ProgramHandle) {
        self.heap.destroy_program(handle);
    }

    /// Create (or re-reference) the named global vec4 slot.
    pub fn create_uniform(&mut self, name: &str) -> UniformHandle {
        self.heap.create_uniform(name)
    }

    pub fn destroy_uniform(&mut self, handle: UniformHandle) {
        self.heap.destroy_uniform(handle);
    }

    pub fn set_uniform(&mut self, handle: UniformHandle, value: Vec4) {
        self.heap.uniforms.set(handle, value);
    }

    // Texture readback.

    /// Borrow a texture's pixels.
    pub fn fetch_texture(&self, handle: TextureHandle) -> ImageView<'_> {
        self.heap.textures[handle.0].view()
    }

    /// Copy a texture's pixels out. `target` must match the byte size
    /// exactly.
    pub fn read_texture(&self, handle: TextureHandle, target: &mut [u8]) {
        let texture = &self.heap.textures[handle.0];
        assert_eq!(target.len(), texture.bytes.len());
        target.copy_from_slice(&texture.bytes);
    }

    // View state.

    pub fn set_view_rect(&mut self, view: ViewId, rect: Rect) {
        self.heap.pass_mut(view).rect = rect;
    }

    pub fn set_view_frame_buffer(&mut self, view: ViewId, framebuffer: FrameBufferHandle) {
        self.heap.pass_mut(view).framebuffer = framebuffer;
    }

    pub fn set_view_clear(&mut self, view: ViewId, flags: ClearFlags, rgba: u32, depth: f32) {
        self.heap.pass_mut(view).clear = ClearState { flags, rgba, depth };
    }

    pub fn set_view_transform(&mut self, view: ViewId, view_matrix: &Mat4, proj: &Mat4) {
        let pass = self.heap.pass_mut(view);
        pass.view = *view_matrix;
        pass.proj = *proj;
    }

    // Draw-call recording.

    pub fn set_transform(&mut self, transform: &Mat4) {
        self.stack.transform = *transform;
    }

    pub fn set_vertex_buffer(&mut self, handle: VertexBufferHandle) {
        self.stack.vertex_buffer = handle;
    }

    pub fn set_index_buffer(&mut self, handle: IndexBufferHandle) {
        self.stack.index_buffer = handle;
    }

    pub fn set_state(&mut self, state: RenderState, tint: u32) {
        self.stack.state = state;
        self.stack.tint = tint;
    }

    /// Snapshot the temporary stack into a command on `view`'s queue, then
    /// reset the stack. The program's vertex-shader uniforms are resolved
    /// by name and copied into the command here; later `set_uniform` calls
    /// do not reach it.
    pub fn submit(&mut self, view: ViewId, program: ProgramHandle) {
        let declared = &self.heap.shaders[self.heap.programs[program.0].vertex.0]
            .as_vertex()
            .uniforms;
        let mut values = Vec::with_capacity(declared.len());
        for decl in declared {
            match self.heap.uniforms.value_by_name(decl.name) {
                Some(value) => values.push(value),
                None => panic!("vertex uniform {:?} submitted before create_uniform", decl.name),
            }
        }
        let command = self.stack.snapshot(program, values);
        self.heap.pass_mut(view).commands.push(command);
        self.stack.clear();
    }

    /// Run every pass: clear its targets as flagged, then execute its
    /// queued commands in insertion order. All queues are empty when this
    /// returns. Fragment-shader uniforms are resolved here, against the
    /// uniform values current at frame time.
    pub fn frame(&mut self) {
        let Engine { heap, raster, .. } = self;
        let ResourceHeap {
            buffers,
            textures,
            framebuffers,
            vertex_buffers,
            index_buffers,
            shaders,
            programs,
            uniforms,
            render_passes,
        } = heap;

        let mut fragment_uniforms: Vec<Vec4> = Vec::new();

        for (view, pass) in render_passes.iter_mut().enumerate() {
            let commands = std::mem::take(&mut pass.commands);
            if !pass.framebuffer.is_valid() {
                debug_assert!(commands.is_empty(), "commands queued on a view with no framebuffer");
                continue;
            }
            trace!("pass {view}: {} commands", commands.len());

            let framebuffer = framebuffers[pass.framebuffer.0];
            let (color_texture, depth_texture) = match framebuffer.depth {
                Some(depth) => {
                    let (color, depth) = textures.get2_mut(framebuffer.color.0, depth.0);
                    (color, Some(depth))
                }
                None => (&mut textures[framebuffer.color.0], None),
            };
            let mut color = color_texture.view_mut();
            let mut depth = depth_texture.map(|texture| texture.view_mut());

            if pass.clear.flags.color {
                color.fill(&pass.clear.color_bytes());
            }
            if pass.clear.flags.depth {
                match depth.as_mut() {
                    Some(view) => view.fill(&pass.clear.depth.to_le_bytes()),
                    None => panic!("depth clear on a framebuffer with no depth attachment"),
                }
            }

            for command in &commands {
                let program = &programs[command.program.0];
                let vertex_shader = shaders[program.vertex.0].as_vertex();
                let fragment_shader = shaders[program.fragment.0].as_fragment();
                let vertex_buffer = &vertex_buffers[command.vertex_buffer.0];
                let index_buffer = &index_buffers[command.index_buffer.0];

                fragment_uniforms.clear();
                for decl in &fragment_shader.uniforms {
                    match uniforms.value_by_name(decl.name) {
                        Some(value) => fragment_uniforms.push(value),
                        None => {
                            panic!("fragment uniform {:?} drawn before create_uniform", decl.name)
                        }
                    }
                }

                let input = DrawInput {
                    proj: &pass.proj,
                    view: &pass.view,
                    transform: &command.transform,
                    rect: pass.rect,
                    state: command.state,
                    layout: &vertex_buffer.layout,
                    vertex_bytes: buffers.bytes(vertex_buffer.buffer),
                    index_bytes: buffers.bytes(index_buffer.buffer),
                    vertex_shader,
                    fragment_shader,
                    vertex_uniforms: &command.vertex_uniforms,
                    fragment_uniforms: &fragment_uniforms,
                };
                raster.render(&input, &mut color, depth.as_mut());
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.heap.assert_drained();
        }
    }
}
