// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Software rasterization engine with a GPU-style object model.
//!
//! The crate mirrors the shape of a thin graphics API: resources live in
//! pools behind typed handles, draw calls are recorded through `set_*`
//! calls and `submit`, and `frame` rasterizes every queued command on the
//! CPU into framebuffer textures. There is no GPU anywhere; shaders are
//! plain Rust function pointers.

pub mod commands;
pub mod engine;
pub mod handle;
pub mod heap;
pub mod image;
pub mod layout;
pub mod memory;
pub mod rasterizer;
pub mod shader;
pub mod state;
pub mod uniform;

pub use commands::{DrawCall, RenderPass, TemporaryStack};
pub use engine::Engine;
pub use handle::{
    BufferHandle, FrameBufferHandle, IndexBufferHandle, Pool, ProgramHandle, ShaderHandle,
    TextureHandle, UniformHandle, VertexBufferHandle, ViewId,
};
pub use heap::{FrameBuffer, IndexBuffer, ResourceHeap, Texture, VertexBuffer};
pub use image::{ImageView, ImageViewMut, TextureFormat};
pub use layout::{Attrib, AttribDesc, AttribType, VertexLayout};
pub use memory::BufferTable;
pub use rasterizer::{DrawInput, Rasterizer};
pub use shader::{
    FragmentFn, FragmentShader, InterpKind, Program, Shader, UniformDecl, UniformType, VertexCtx,
    VertexFn, VertexShader,
};
pub use state::{ClearFlags, ClearState, CullMode, DepthTest, RenderState};
pub use uniform::UniformStore;
