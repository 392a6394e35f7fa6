// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Demo shaders: position through the combined transform, vertex colors
//! interpolated across each triangle.

use glam::{I16Vec2, Vec3, Vec4};
use softrast_gpu::{Attrib, FragmentShader, InterpKind, VertexCtx, VertexShader};

fn color_vertex(
    ctx: &VertexCtx<'_>,
    vertex: &[u8],
    _uniforms: &[Vec4],
    out_position: &mut Vec4,
    outputs: &mut [&mut [f32]],
) {
    let position = ctx.layout.attr_vec3_f32(vertex, Attrib::Position);
    let color = ctx.layout.attr_rgb_u8(vertex, Attrib::Color0);
    *out_position = *ctx.local_to_unit * position.extend(1.0);
    outputs[0][0] = color[0] as f32 / 255.0;
    outputs[0][1] = color[1] as f32 / 255.0;
    outputs[0][2] = color[2] as f32 / 255.0;
}

fn color_fragment(_coords: I16Vec2, inputs: &[&[f32]], _uniforms: &[Vec4]) -> Vec3 {
    Vec3::new(inputs[0][0], inputs[0][1], inputs[0][2])
}

pub fn color_vertex_shader() -> VertexShader {
    VertexShader {
        outputs: vec![InterpKind::Vec3],
        uniforms: Vec::new(),
        entry: color_vertex,
    }
}

pub fn color_fragment_shader() -> FragmentShader {
    FragmentShader {
        uniforms: Vec::new(),
        entry: color_fragment,
    }
}
