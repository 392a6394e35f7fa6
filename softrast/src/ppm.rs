// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary PPM (P6) image output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use softrast_gpu::ImageView;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PpmError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("PPM needs an rgb image, got {0} bytes per pixel")]
    NotRgb(u8),
}

/// Write `image` as binary PPM to `out`.
pub fn write<W: Write>(mut out: W, image: &ImageView<'_>) -> Result<(), PpmError> {
    if image.bytes_per_pixel != 3 {
        return Err(PpmError::NotRgb(image.bytes_per_pixel));
    }
    write!(out, "P6\n{} {}\n255\n", image.width, image.height)?;
    for pixel in 0..image.pixel_count() {
        out.write_all(image.pixel(pixel))?;
    }
    out.flush()?;
    Ok(())
}

/// Write `image` as binary PPM to a file at `path`.
pub fn write_ppm(path: &Path, image: &ImageView<'_>) -> Result<(), PpmError> {
    let file = File::create(path)?;
    write(BufWriter::new(file), image)
}
