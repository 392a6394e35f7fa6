// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The triangle rasterizer.
//!
//! One call to [`Rasterizer::render`] executes a single draw call in seven
//! steps: vertex stage, polygon extraction with culling and winding
//! normalization, rendered-rect union, edge-function visibility with depth
//! resolution, barycentric interpolation of declared vertex outputs, and
//! the fragment stage.
//!
//! Scratch tables are reused across draw calls and only grow. The
//! full-image visibility table is zeroed once per draw call, and the
//! polygon-local table is zeroed per polygon over its bounding-box area;
//! everything else is overwritten unconditionally before being read.

use byteorder::{ByteOrder, LittleEndian};
use glam::{I16Vec2, IVec2, Mat4, Vec2, Vec3, Vec4};
use log::trace;
use softrast_common::{Rect, VertexIndex, VERTEX_INDEX_SIZE};

use crate::image::ImageViewMut;
use crate::layout::VertexLayout;
use crate::shader::{FragmentShader, InterpKind, VertexCtx, VertexShader};
use crate::state::{CullMode, RenderState};

/// Everything one draw call needs, resolved by the frame driver.
pub struct DrawInput<'a> {
    pub proj: &'a Mat4,
    pub view: &'a Mat4,
    pub transform: &'a Mat4,
    /// Viewport rect of the pass; bounding boxes are clipped into it and
    /// its extent scales unit coordinates to pixels.
    pub rect: Rect,
    pub state: RenderState,
    pub layout: &'a VertexLayout,
    pub vertex_bytes: &'a [u8],
    pub index_bytes: &'a [u8],
    pub vertex_shader: &'a VertexShader,
    pub fragment_shader: &'a FragmentShader,
    pub vertex_uniforms: &'a [Vec4],
    pub fragment_uniforms: &'a [Vec4],
}

/// Per-pixel visibility record.
#[derive(Debug, Clone, Copy, Default)]
struct Visibility {
    visible: bool,
    weights: Vec3,
    polygon: u32,
}

/// One surviving triangle in screen space.
#[derive(Debug, Clone, Copy)]
struct Polygon {
    coords: [I16Vec2; 3],
    indices: [VertexIndex; 3],
    /// Signed double area, positive after winding normalization.
    area: i32,
    min: I16Vec2,
    /// Exclusive, already clipped into the viewport rect.
    max: I16Vec2,
}

/// One vertex-output column: `components` floats per vertex (or per pixel
/// once interpolated).
#[derive(Debug)]
struct Column {
    kind: InterpKind,
    data: Vec<f32>,
}

/// Reusable draw-call scratch plus the pipeline itself.
#[derive(Debug, Default)]
pub struct Rasterizer {
    screen_coords: Vec<I16Vec2>,
    homogeneous: Vec<Vec3>,
    polygons: Vec<Polygon>,
    visibility: Vec<Visibility>,
    local_visibility: Vec<Visibility>,
    vertex_outputs: Vec<Column>,
    interpolated: Vec<Column>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one draw call into `color` (and `depth` when the state
    /// reads or writes depth).
    pub fn render(
        &mut self,
        input: &DrawInput<'_>,
        color: &mut ImageViewMut<'_>,
        mut depth: Option<&mut ImageViewMut<'_>>,
    ) {
        debug_assert!(input.layout.position_is_vec3_f32());
        debug_assert_eq!(color.bytes_per_pixel, 3);

        let stride = input.layout.stride() as usize;
        debug_assert!(input.vertex_bytes.len() % stride == 0);
        let vertex_count = input.vertex_bytes.len() / stride;
        debug_assert!(input.index_bytes.len() % (3 * VERTEX_INDEX_SIZE) == 0);
        let triangle_count = input.index_bytes.len() / (3 * VERTEX_INDEX_SIZE);

        let depth_read = input.state.depth_read();
        debug_assert!(!depth_read || depth.is_some());
        if let Some(view) = depth.as_deref() {
            debug_assert_eq!((view.width, view.height), (color.width, color.height));
        }

        let local_to_unit = *input.proj * *input.view * *input.transform;
        let pixel_count = color.pixel_count();

        self.prepare(vertex_count, pixel_count, &input.vertex_shader.outputs);
        self.run_vertex_stage(input, &local_to_unit, stride, depth_read);
        self.extract_polygons(input, triangle_count, color.width, color.height);
        let rendered = self.rendered_rect();
        trace!(
            "draw: {} of {} triangles survive, rect {:?}..{:?}",
            self.polygons.len(),
            triangle_count,
            rendered.0,
            rendered.1
        );
        self.resolve_visibility(input.state, color.width, depth.as_deref_mut());
        self.interpolate_outputs(rendered, color.width);
        self.run_fragment_stage(input, rendered, color);
    }

    fn prepare(&mut self, vertex_count: usize, pixel_count: usize, outputs: &[InterpKind]) {
        self.screen_coords.clear();
        self.screen_coords.resize(vertex_count, I16Vec2::ZERO);
        self.homogeneous.clear();
        self.homogeneous.resize(vertex_count, Vec3::ZERO);
        self.polygons.clear();

        if self.visibility.len() < pixel_count {
            self.visibility.resize(pixel_count, Visibility::default());
        }
        self.visibility[..pixel_count].fill(Visibility::default());
        if self.local_visibility.len() < pixel_count {
            self.local_visibility.resize(pixel_count, Visibility::default());
        }

        let shapes_match = self.vertex_outputs.len() == outputs.len()
            && self
                .vertex_outputs
                .iter()
                .zip(outputs)
                .all(|(col, &kind)| col.kind == kind);
        if !shapes_match {
            self.vertex_outputs = outputs
                .iter()
                .map(|&kind| Column {
                    kind,
                    data: Vec::new(),
                })
                .collect();
            self.interpolated = outputs
                .iter()
                .map(|&kind| Column {
                    kind,
                    data: Vec::new(),
                })
                .collect();
        }
        for col in &mut self.vertex_outputs {
            col.data.resize(vertex_count * col.kind.components(), 0.0);
        }
        for col in &mut self.interpolated {
            let need = pixel_count * col.kind.components();
            if col.data.len() < need {
                col.data.resize(need, 0.0);
            }
        }
    }

    fn run_vertex_stage(
        &mut self,
        input: &DrawInput<'_>,
        local_to_unit: &Mat4,
        stride: usize,
        depth_read: bool,
    ) {
        let ctx = VertexCtx {
            projection: input.proj,
            view: input.view,
            transform: input.transform,
            local_to_unit,
            layout: input.layout,
        };
        let entry = input.vertex_shader.entry;
        let scale = input.rect.extent.as_vec2() - 1.0;

        for i in 0..self.screen_coords.len() {
            let vertex = &input.vertex_bytes[i * stride..(i + 1) * stride];
            let mut outputs: Vec<&mut [f32]> = self
                .vertex_outputs
                .iter_mut()
                .map(|col| {
                    let comps = col.kind.components();
                    &mut col.data[i * comps..(i + 1) * comps]
                })
                .collect();

            let mut position = Vec4::ZERO;
            entry(&ctx, vertex, input.vertex_uniforms, &mut position, &mut outputs);

            let mut unit = position / position.w;
            unit = (unit + 1.0) * 0.5;
            let pixel = Vec2::new(unit.x, unit.y) * scale;
            self.screen_coords[i] = I16Vec2::new(pixel.x as i16, pixel.y as i16);
            if depth_read {
                self.homogeneous[i] = Vec3::new(unit.x, unit.y, unit.z);
            }
        }
    }

    fn extract_polygons(
        &mut self,
        input: &DrawInput<'_>,
        triangle_count: usize,
        width: u16,
        height: u16,
    ) {
        for t in 0..triangle_count {
            let at = t * 3 * VERTEX_INDEX_SIZE;
            let mut indices = [
                LittleEndian::read_u16(&input.index_bytes[at..]),
                LittleEndian::read_u16(&input.index_bytes[at + VERTEX_INDEX_SIZE..]),
                LittleEndian::read_u16(&input.index_bytes[at + 2 * VERTEX_INDEX_SIZE..]),
            ];
            let mut coords = [
                self.screen_coords[indices[0] as usize],
                self.screen_coords[indices[1] as usize],
                self.screen_coords[indices[2] as usize],
            ];

            let a = coords[2].as_ivec2() - coords[0].as_ivec2();
            let b = coords[1].as_ivec2() - coords[0].as_ivec2();
            let mut area = a.x * b.y - a.y * b.x;

            match input.state.cull {
                CullMode::Clockwise => {
                    if area >= 0 {
                        continue;
                    }
                    coords.swap(0, 1);
                    indices.swap(0, 1);
                    area = -area;
                }
                CullMode::CounterClockwise => {
                    if area <= 0 {
                        continue;
                    }
                }
                CullMode::None => {
                    if area < 0 {
                        coords.swap(0, 1);
                        indices.swap(0, 1);
                        area = -area;
                    } else if area == 0 {
                        continue;
                    }
                }
            }

            let min = coords[0].min(coords[1]).min(coords[2]);
            let max = coords[0]
                .max(coords[1])
                .max(coords[2])
                .saturating_add(I16Vec2::ONE);
            let (min, max) = fit_into(min, max, &input.rect);
            debug_assert!(min.x <= max.x && min.y <= max.y);
            debug_assert!(max.x as i32 <= width as i32);
            debug_assert!(max.y as i32 <= height as i32);

            self.polygons.push(Polygon {
                coords,
                indices,
                area,
                min,
                max,
            });
        }
    }

    /// Union of all surviving bounding boxes; later stages iterate only
    /// this rect, leaving every other pixel untouched this draw call.
    fn rendered_rect(&self) -> (I16Vec2, I16Vec2) {
        let mut polygons = self.polygons.iter();
        let Some(first) = polygons.next() else {
            return (I16Vec2::ZERO, I16Vec2::ZERO);
        };
        let mut min = first.min;
        let mut max = first.max;
        for poly in polygons {
            min = min.min(poly.min);
            max = max.max(poly.max);
        }
        (min, max)
    }

    fn resolve_visibility(
        &mut self,
        state: RenderState,
        width: u16,
        mut depth: Option<&mut ImageViewMut<'_>>,
    ) {
        let depth_read = state.depth_read();

        for (polygon_index, poly) in self.polygons.iter().enumerate() {
            let box_w = (poly.max.x - poly.min.x) as usize;
            let box_h = (poly.max.y - poly.min.y) as usize;
            let local = &mut self.local_visibility[..box_w * box_h];
            local.fill(Visibility::default());
            rasterize_polygon(poly, polygon_index as u32, box_w, box_h, local);

            if depth_read {
                let depth_view = match depth.as_deref_mut() {
                    Some(view) => view,
                    None => panic!("depth test requested without a depth target"),
                };
                let z = Vec3::new(
                    self.homogeneous[poly.indices[0] as usize].z,
                    self.homogeneous[poly.indices[1] as usize].z,
                    self.homogeneous[poly.indices[2] as usize].z,
                );
                for y in 0..box_h {
                    for x in 0..box_w {
                        let cell = local[y * box_w + x];
                        if !cell.visible {
                            continue;
                        }
                        let image_index = (y as i32 + poly.min.y as i32) as usize
                            * width as usize
                            + (x as i32 + poly.min.x as i32) as usize;
                        let interpolated = z.dot(cell.weights);
                        let stored =
                            LittleEndian::read_f32(depth_view.pixel(image_index));
                        if interpolated < stored {
                            self.visibility[image_index] = cell;
                            if state.depth_write {
                                LittleEndian::write_f32(
                                    depth_view.pixel_mut(image_index),
                                    interpolated,
                                );
                            }
                        }
                    }
                }
            } else {
                // Last writer wins at shared pixels.
                for y in 0..box_h {
                    for x in 0..box_w {
                        let cell = local[y * box_w + x];
                        if !cell.visible {
                            continue;
                        }
                        let image_index = (y as i32 + poly.min.y as i32) as usize
                            * width as usize
                            + (x as i32 + poly.min.x as i32) as usize;
                        self.visibility[image_index] = cell;
                    }
                }
            }
        }
    }

    fn interpolate_outputs(&mut self, rendered: (I16Vec2, I16Vec2), width: u16) {
        if self.vertex_outputs.is_empty() {
            return;
        }
        let (min, max) = rendered;
        for y in min.y..max.y {
            for x in min.x..max.x {
                let pixel = y as usize * width as usize + x as usize;
                let cell = self.visibility[pixel];
                if !cell.visible {
                    continue;
                }
                let poly = &self.polygons[cell.polygon as usize];
                for (src, dst) in self.vertex_outputs.iter().zip(self.interpolated.iter_mut()) {
                    interpolate_column(src, dst, poly.indices, cell.weights, pixel);
                }
            }
        }
    }

    fn run_fragment_stage(
        &self,
        input: &DrawInput<'_>,
        rendered: (I16Vec2, I16Vec2),
        color: &mut ImageViewMut<'_>,
    ) {
        let entry = input.fragment_shader.entry;
        let (min, max) = rendered;
        let mut inputs: Vec<&[f32]> = Vec::with_capacity(self.interpolated.len());

        for y in min.y..max.y {
            for x in min.x..max.x {
                let pixel = y as usize * color.width as usize + x as usize;
                if !self.visibility[pixel].visible {
                    continue;
                }
                inputs.clear();
                for col in &self.interpolated {
                    let comps = col.kind.components();
                    inputs.push(&col.data[pixel * comps..(pixel + 1) * comps]);
                }
                let rgb = entry(I16Vec2::new(x, y), &inputs, input.fragment_uniforms);
                let bytes = [
                    (rgb.x * 255.0) as u8,
                    (rgb.y * 255.0) as u8,
                    (rgb.z * 255.0) as u8,
                ];
                color.set_pixel(pixel, &bytes);
            }
        }
    }
}

/// Clamp a bounding box into the viewport rect. A box fully outside
/// collapses to an empty span on the nearest edge.
fn fit_into(min: I16Vec2, max: I16Vec2, rect: &Rect) -> (I16Vec2, I16Vec2) {
    let lo = rect.point;
    let hi = rect.max_point();
    (min.clamp(lo, hi), max.clamp(lo, hi))
}

/// Edge-function scan over one polygon's bounding box, recording covered
/// pixels into the box-local visibility table.
///
/// Per-edge accumulators are seeded at the box origin and stepped
/// incrementally: `+= d.y` per pixel, `-= d.x` per row. A pixel is covered
/// when all three are non-negative; weights are the rotated accumulators
/// normalized by the polygon area.
fn rasterize_polygon(
    poly: &Polygon,
    polygon_index: u32,
    box_w: usize,
    box_h: usize,
    local: &mut [Visibility],
) {
    debug_assert!(poly.area > 0);

    let [p0, p1, p2] = poly.coords;
    let d0 = p0.as_ivec2() - p2.as_ivec2();
    let d1 = p1.as_ivec2() - p0.as_ivec2();
    let d2 = p2.as_ivec2() - p1.as_ivec2();

    let min = poly.min.as_ivec2();
    let seed = |p: I16Vec2, d: IVec2| -> i32 {
        (min.x - p.x as i32) * d.y - (min.y - p.y as i32) * d.x
    };
    let mut ey0 = seed(p0, d0);
    let mut ey1 = seed(p1, d1);
    let mut ey2 = seed(p2, d2);

    let area = poly.area as f32;

    for y in 0..box_h {
        let (mut ex0, mut ex1, mut ex2) = (ey0, ey1, ey2);
        for x in 0..box_w {
            if ex0 >= 0 && ex1 >= 0 && ex2 >= 0 {
                let w0 = ex2 as f32 / area;
                let w1 = ex0 as f32 / area;
                let w2 = ex1 as f32 / area;
                debug_assert!(w0 + w1 + w2 <= 1.01);
                local[y * box_w + x] = Visibility {
                    visible: true,
                    weights: Vec3::new(w0, w1, w2),
                    polygon: polygon_index,
                };
            }
            ex0 += d0.y;
            ex1 += d1.y;
            ex2 += d2.y;
        }
        ey0 -= d0.x;
        ey1 -= d1.x;
        ey2 -= d2.x;
    }
}

/// Blend one output column's three vertex values into the per-pixel slot,
/// unrolled per declared shape.
fn interpolate_column(
    src: &Column,
    dst: &mut Column,
    indices: [VertexIndex; 3],
    weights: Vec3,
    pixel: usize,
) {
    let comps = src.kind.components();
    let v0 = &src.data[indices[0] as usize * comps..(indices[0] as usize + 1) * comps];
    let v1 = &src.data[indices[1] as usize * comps..(indices[1] as usize + 1) * comps];
    let v2 = &src.data[indices[2] as usize * comps..(indices[2] as usize + 1) * comps];
    let out = &mut dst.data[pixel * comps..(pixel + 1) * comps];

    match src.kind {
        InterpKind::Scalar => {
            out[0] = v0[0] * weights.x + v1[0] * weights.y + v2[0] * weights.z;
        }
        InterpKind::Vec2 => {
            out[0] = v0[0] * weights.x + v1[0] * weights.y + v2[0] * weights.z;
            out[1] = v0[1] * weights.x + v1[1] * weights.y + v2[1] * weights.z;
        }
        InterpKind::Vec3 => {
            out[0] = v0[0] * weights.x + v1[0] * weights.y + v2[0] * weights.z;
            out[1] = v0[1] * weights.x + v1[1] * weights.y + v2[1] * weights.z;
            out[2] = v0[2] * weights.x + v1[2] * weights.y + v2[2] * weights.z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Attrib, AttribType};
    use crate::shader::FragmentFn;
    use approx::assert_relative_eq;

    fn triangle(p0: (i16, i16), p1: (i16, i16), p2: (i16, i16)) -> Polygon {
        let coords = [
            I16Vec2::new(p0.0, p0.1),
            I16Vec2::new(p1.0, p1.1),
            I16Vec2::new(p2.0, p2.1),
        ];
        let a = (coords[2] - coords[0]).as_ivec2();
        let b = (coords[1] - coords[0]).as_ivec2();
        let area = a.x * b.y - a.y * b.x;
        let min = coords[0].min(coords[1]).min(coords[2]);
        let max = coords[0].max(coords[1]).max(coords[2]) + I16Vec2::ONE;
        Polygon {
            coords,
            indices: [0, 1, 2],
            area,
            min,
            max,
        }
    }

    #[test]
    fn test_edge_scan_corner_weights() {
        let poly = triangle((0, 0), (0, 4), (4, 0));
        assert_eq!(poly.area, 16);
        let box_w = 5;
        let box_h = 5;
        let mut local = vec![Visibility::default(); box_w * box_h];
        rasterize_polygon(&poly, 7, box_w, box_h, &mut local);

        // Each vertex pixel carries full weight for its own vertex.
        let at = |x: usize, y: usize| local[y * box_w + x];
        assert!(at(0, 0).visible);
        assert_relative_eq!(at(0, 0).weights.x, 1.0);
        assert_relative_eq!(at(0, 0).weights.y, 0.0);
        assert_relative_eq!(at(0, 0).weights.z, 0.0);

        assert!(at(0, 4).visible);
        assert_relative_eq!(at(0, 4).weights.y, 1.0);

        assert!(at(4, 0).visible);
        assert_relative_eq!(at(4, 0).weights.z, 1.0);

        assert_eq!(at(0, 0).polygon, 7);
    }

    #[test]
    fn test_edge_scan_coverage_and_weight_bounds() {
        let poly = triangle((0, 0), (0, 4), (4, 0));
        let box_w = 5;
        let box_h = 5;
        let mut local = vec![Visibility::default(); box_w * box_h];
        rasterize_polygon(&poly, 0, box_w, box_h, &mut local);

        let mut covered = 0;
        for y in 0..box_h {
            for x in 0..box_w {
                let cell = local[y * box_w + x];
                if x + y <= 4 {
                    assert!(cell.visible, "expected coverage at ({x},{y})");
                    covered += 1;
                    let w = cell.weights;
                    assert!(w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0);
                    assert!(w.x + w.y + w.z <= 1.01);
                } else {
                    assert!(!cell.visible, "unexpected coverage at ({x},{y})");
                }
            }
        }
        assert_eq!(covered, 15);
    }

    #[test]
    fn test_fit_into_clamps_offscreen_box() {
        let rect = Rect::new(0, 0, 8, 8);
        let (min, max) = fit_into(I16Vec2::new(-5, 2), I16Vec2::new(3, 12), &rect);
        assert_eq!(min, I16Vec2::new(0, 2));
        assert_eq!(max, I16Vec2::new(3, 8));

        // Fully outside collapses to an empty box on the edge.
        let (min, max) = fit_into(I16Vec2::new(-9, -9), I16Vec2::new(-2, -2), &rect);
        assert_eq!(min, max);
    }

    fn passthrough_vertex(
        ctx: &VertexCtx<'_>,
        vertex: &[u8],
        _uniforms: &[Vec4],
        out_position: &mut Vec4,
        _outputs: &mut [&mut [f32]],
    ) {
        let pos = ctx.layout.attr_vec3_f32(vertex, Attrib::Position);
        *out_position = *ctx.local_to_unit * Vec4::new(pos.x, pos.y, pos.z, 1.0);
    }

    const WHITE_FRAGMENT: FragmentFn = |_coords, _inputs, _uniforms| Vec3::ONE;

    fn vertex_bytes(positions: &[[f32; 3]]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for p in positions {
            for c in p {
                bytes.extend_from_slice(&c.to_le_bytes());
            }
        }
        bytes
    }

    fn index_bytes(indices: &[u16]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for i in indices {
            bytes.extend_from_slice(&i.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_full_draw_canonical_triangle() {
        let layout = VertexLayout::begin()
            .add(Attrib::Position, 3, AttribType::Float, false)
            .end();
        let vertices = vertex_bytes(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        let indices = index_bytes(&[0, 1, 2]);
        let vertex_shader = VertexShader {
            outputs: Vec::new(),
            uniforms: Vec::new(),
            entry: passthrough_vertex,
        };
        let fragment_shader = FragmentShader {
            uniforms: Vec::new(),
            entry: WHITE_FRAGMENT,
        };
        let identity = Mat4::IDENTITY;
        let input = DrawInput {
            proj: &identity,
            view: &identity,
            transform: &identity,
            rect: Rect::new(0, 0, 8, 8),
            state: RenderState {
                cull: CullMode::None,
                depth_test: crate::state::DepthTest::None,
                depth_write: false,
            },
            layout: &layout,
            vertex_bytes: &vertices,
            index_bytes: &indices,
            vertex_shader: &vertex_shader,
            fragment_shader: &fragment_shader,
            vertex_uniforms: &[],
            fragment_uniforms: &[],
        };

        let mut pixels = vec![0u8; 8 * 8 * 3];
        let mut color = ImageViewMut::new(8, 8, 3, &mut pixels);
        let mut rasterizer = Rasterizer::new();
        rasterizer.render(&input, &mut color, None);

        // Screen vertices land at (3,3), (7,3), (3,7); coverage is the
        // axis-aligned right triangle between them.
        let mut white = Vec::new();
        for y in 0..8i16 {
            for x in 0..8i16 {
                let pixel = color.pixel((y as usize) * 8 + x as usize);
                if pixel == [255, 255, 255] {
                    white.push((x, y));
                }
            }
        }
        let expected: Vec<(i16, i16)> = (3i16..8)
            .flat_map(|y| (3i16..8).map(move |x| (x, y)))
            .filter(|&(x, y)| x + y <= 10)
            .collect();
        assert_eq!(white, expected);
        assert_eq!(white.len(), 15);
    }

    #[test]
    fn test_draw_with_no_triangles_touches_nothing() {
        let layout = VertexLayout::begin()
            .add(Attrib::Position, 3, AttribType::Float, false)
            .end();
        let vertices = vertex_bytes(&[[0.0, 0.0, 0.0]]);
        let vertex_shader = VertexShader {
            outputs: Vec::new(),
            uniforms: Vec::new(),
            entry: passthrough_vertex,
        };
        let fragment_shader = FragmentShader {
            uniforms: Vec::new(),
            entry: WHITE_FRAGMENT,
        };
        let identity = Mat4::IDENTITY;
        let input = DrawInput {
            proj: &identity,
            view: &identity,
            transform: &identity,
            rect: Rect::new(0, 0, 4, 4),
            state: RenderState {
                cull: CullMode::None,
                depth_test: crate::state::DepthTest::None,
                depth_write: false,
            },
            layout: &layout,
            vertex_bytes: &vertices,
            index_bytes: &[],
            vertex_shader: &vertex_shader,
            fragment_shader: &fragment_shader,
            vertex_uniforms: &[],
            fragment_uniforms: &[],
        };

        let mut pixels = vec![0x55u8; 4 * 4 * 3];
        let mut color = ImageViewMut::new(4, 4, 3, &mut pixels);
        let mut rasterizer = Rasterizer::new();
        rasterizer.render(&input, &mut color, None);
        assert!(pixels.iter().all(|&b| b == 0x55));
    }
}
