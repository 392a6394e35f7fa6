// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

mod cube;
mod ppm;
mod shaders;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Mat4, Vec3};
use log::info;

use softrast_common::Rect;
use softrast_gpu::{
    ClearFlags, ClearState, CullMode, DepthTest, Engine, ImageViewMut, RenderState, Shader,
};

/// softrast - software rasterizer demo
#[derive(Parser, Debug)]
#[command(name = "softrast", version, about = "Renders a vertex-colored cube on the CPU")]
struct Args {
    /// Render target width in pixels
    #[arg(long, default_value_t = 256)]
    width: u16,

    /// Render target height in pixels
    #[arg(long, default_value_t = 256)]
    height: u16,

    /// Model rotation around the Y axis, in degrees
    #[arg(long, default_value_t = 30.0)]
    angle: f32,

    /// Number of frames to render; each advances the rotation and writes
    /// a numbered output file
    #[arg(long, default_value_t = 1)]
    frames: u16,

    /// Per-frame rotation increment in degrees
    #[arg(long, default_value_t = 10.0)]
    angle_step: f32,

    /// Integer upscale factor applied when writing the image
    #[arg(long, default_value_t = 1)]
    scale: u16,

    /// Output image path (binary PPM)
    #[arg(short, long, default_value = "cube.ppm")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output path of one frame: the configured path as-is for a single-frame
/// run, numbered before the extension otherwise.
fn frame_path(output: &Path, frame: u16, frames: u16) -> PathBuf {
    if frames <= 1 {
        return output.to_path_buf();
    }
    let stem = output.file_stem().unwrap_or(OsStr::new("frame"));
    let mut name = format!("{}_{frame:03}", stem.to_string_lossy());
    if let Some(ext) = output.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    output.with_file_name(name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("softrast cube demo, {}x{}", args.width, args.height);

    let mut engine = Engine::new();
    let framebuffer = engine.create_frame_buffer_with_depth(args.width, args.height);
    engine.set_view_frame_buffer(0, framebuffer);
    engine.set_view_rect(0, Rect::new(0, 0, args.width, args.height));
    engine.set_view_clear(
        0,
        ClearFlags::COLOR_AND_DEPTH,
        0x3030_30FF,
        ClearState::DEFAULT_DEPTH,
    );

    let view = Mat4::look_at_rh(Vec3::new(0.0, 1.2, -2.4), Vec3::ZERO, Vec3::Y);
    let aspect = args.width as f32 / args.height as f32;
    let proj = Mat4::perspective_rh(60f32.to_radians(), aspect, 0.1, 10.0);
    engine.set_view_transform(0, &view, &proj);

    let layout = cube::vertex_layout();
    let vertex_buffer = engine.create_vertex_buffer(bytemuck::cast_slice(&cube::VERTICES), &layout);
    let index_buffer = engine.create_index_buffer(bytemuck::cast_slice(&cube::INDICES));
    let vertex_shader = engine.create_shader(Shader::Vertex(shaders::color_vertex_shader()));
    let fragment_shader = engine.create_shader(Shader::Fragment(shaders::color_fragment_shader()));
    let program = engine.create_program(vertex_shader, fragment_shader);

    let scaled_width = u16::try_from(args.width as u32 * args.scale as u32)
        .context("scaled width does not fit in 16 bits")?;
    let scaled_height = u16::try_from(args.height as u32 * args.scale as u32)
        .context("scaled height does not fit in 16 bits")?;

    for frame in 0..args.frames {
        let angle = args.angle + frame as f32 * args.angle_step;
        // Occlusion comes from the depth buffer, so winding culling stays
        // off.
        engine.set_transform(&Mat4::from_rotation_y(angle.to_radians()));
        engine.set_vertex_buffer(vertex_buffer);
        engine.set_index_buffer(index_buffer);
        engine.set_state(
            RenderState {
                cull: CullMode::None,
                depth_test: DepthTest::Less,
                depth_write: true,
            },
            u32::MAX,
        );
        engine.submit(0, program);
        engine.frame();

        let path = frame_path(&args.output, frame, args.frames);
        let color = engine.fetch_texture(engine.texture_of(framebuffer));
        if args.scale > 1 {
            let mut bytes = vec![0u8; scaled_width as usize * scaled_height as usize * 3];
            let mut target = ImageViewMut::new(scaled_width, scaled_height, 3, &mut bytes);
            color.copy_stretch_to(&mut target);
            ppm::write_ppm(&path, &target.as_view())
        } else {
            ppm::write_ppm(&path, &color)
        }
        .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    engine.destroy_vertex_buffer(vertex_buffer);
    engine.destroy_index_buffer(index_buffer);
    engine.destroy_program(program);
    engine.destroy_shader(vertex_shader);
    engine.destroy_shader(fragment_shader);
    engine.destroy_frame_buffer(framebuffer);
    engine.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_keeps_the_path() {
        let path = frame_path(Path::new("out/cube.ppm"), 0, 1);
        assert_eq!(path, PathBuf::from("out/cube.ppm"));
    }

    #[test]
    fn test_multi_frame_numbers_before_the_extension() {
        assert_eq!(
            frame_path(Path::new("out/cube.ppm"), 4, 12),
            PathBuf::from("out/cube_004.ppm")
        );
        assert_eq!(
            frame_path(Path::new("cube"), 0, 2),
            PathBuf::from("cube_000")
        );
    }
}
