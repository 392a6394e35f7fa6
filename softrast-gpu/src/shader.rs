// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shader descriptors.
//!
//! Shaders are native Rust functions, not compiled programs: a vertex
//! shader is an entry function plus the list of output columns it writes
//! and the uniforms it declares; a fragment shader is an entry function
//! plus its uniform declarations. Programs pair the two by handle.

use glam::{I16Vec2, Mat4, Vec3, Vec4};

use crate::handle::ShaderHandle;
use crate::layout::VertexLayout;

/// Shape of one interpolated vertex-output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpKind {
    Scalar,
    Vec2,
    Vec3,
}

impl InterpKind {
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            InterpKind::Scalar => 1,
            InterpKind::Vec2 => 2,
            InterpKind::Vec3 => 3,
        }
    }
}

/// Uniform value type. Samplers do not exist in this engine, so vec4 is
/// the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformType {
    Vec4,
}

/// A uniform a shader declares by name, resolved against the global
/// uniform table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDecl {
    pub name: &'static str,
    pub ty: UniformType,
}

impl UniformDecl {
    pub const fn vec4(name: &'static str) -> Self {
        Self {
            name,
            ty: UniformType::Vec4,
        }
    }
}

/// Matrices and layout handed to every vertex-shader invocation.
#[derive(Debug, Clone, Copy)]
pub struct VertexCtx<'a> {
    pub projection: &'a Mat4,
    pub view: &'a Mat4,
    pub transform: &'a Mat4,
    pub local_to_unit: &'a Mat4,
    pub layout: &'a VertexLayout,
}

/// Vertex stage entry: reads one vertex's bytes, writes the declared
/// output columns, returns the clip-space position.
pub type VertexFn = fn(
    ctx: &VertexCtx<'_>,
    vertex: &[u8],
    uniforms: &[Vec4],
    out_position: &mut Vec4,
    outputs: &mut [&mut [f32]],
);

/// Fragment stage entry: receives the pixel coordinate and the
/// interpolated input columns, returns a unit-range rgb color.
pub type FragmentFn = fn(coords: I16Vec2, inputs: &[&[f32]], uniforms: &[Vec4]) -> Vec3;

#[derive(Debug, Clone)]
pub struct VertexShader {
    pub outputs: Vec<InterpKind>,
    pub uniforms: Vec<UniformDecl>,
    pub entry: VertexFn,
}

#[derive(Debug, Clone)]
pub struct FragmentShader {
    pub uniforms: Vec<UniformDecl>,
    pub entry: FragmentFn,
}

/// Entry stored in the shader pool.
#[derive(Debug, Clone)]
pub enum Shader {
    Vertex(VertexShader),
    Fragment(FragmentShader),
}

impl Shader {
    pub fn as_vertex(&self) -> &VertexShader {
        match self {
            Shader::Vertex(shader) => shader,
            Shader::Fragment(_) => panic!("fragment shader bound at a vertex stage"),
        }
    }

    pub fn as_fragment(&self) -> &FragmentShader {
        match self {
            Shader::Fragment(shader) => shader,
            Shader::Vertex(_) => panic!("vertex shader bound at a fragment stage"),
        }
    }
}

/// One vertex shader + one fragment shader.
#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub vertex: ShaderHandle,
    pub fragment: ShaderHandle,
}
