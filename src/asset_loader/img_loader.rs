use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

use crate::{error::ImageIoError, interval::Interval, math::Color};

/// A decoded image held as a flat row-major RGBA f32 buffer in linear space,
/// the contract the rendering core consumes per the pixel-buffer I/O facade.
#[derive(Debug, Clone)]
pub struct RtwImage {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl RtwImage {
    pub fn load(path: impl AsRef<Path>) -> Result<RtwImage, ImageIoError> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|source| ImageIoError::Unreadable { path: path.to_path_buf(), source })?;
        let rgba = decoded.into_rgba32f();
        let (width, height) = rgba.dimensions();
        Ok(RtwImage { width: width as usize, height: height as usize, data: rgba.into_raw() })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn texel(&self, x: usize, y: usize) -> Color {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let idx = (y * self.width + x) * 4;
        Color::rgb(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Bilinear sample at `(u,v) in [0,1]^2`, clamped to the image edge.
    pub fn sample_bilinear(&self, u: f32, v: f32) -> Color {
        let uv = Interval::new(0.0, 1.0);
        let u = uv.clamp(u);
        let v = 1.0 - uv.clamp(v);

        let fx = u * (self.width.max(1) - 1).max(1) as f32;
        let fy = v * (self.height.max(1) - 1).max(1) as f32;
        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;

        let c00 = self.texel(x0, y0);
        let c10 = self.texel(x0 + 1, y0);
        let c01 = self.texel(x0, y0 + 1);
        let c11 = self.texel(x0 + 1, y0 + 1);

        let top = Color::lerp(c00, c10, tx);
        let bottom = Color::lerp(c01, c11, tx);
        Color::lerp(top, bottom, ty)
    }

    /// Nearest-neighbor sample, used when the configuration disables
    /// bilinear filtering.
    pub fn sample_nearest(&self, u: f32, v: f32) -> Color {
        let uv = Interval::new(0.0, 1.0);
        let u = uv.clamp(u);
        let v = 1.0 - uv.clamp(v);
        let x = (u * self.width as f32) as usize;
        let y = (v * self.height as f32) as usize;
        self.texel(x, y)
    }
}

/// Writes an interleaved row-major RGB f32 framebuffer to `path`. LDR formats
/// (`.png`, `.jpg`, `.bmp`, `.tga`) are gamma-corrected and clamped to
/// `[0,1]`; `.hdr` stores the raw linear floats.
pub fn write_framebuffer(path: impl AsRef<Path>, width: u32, height: u32, linear: &[f32]) -> Result<(), ImageIoError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "hdr" => {
            let hdr_buffer: ImageBuffer<image::Rgb<f32>, Vec<f32>> =
                ImageBuffer::from_raw(width, height, linear.to_vec())
                    .expect("framebuffer length must match width*height*3");
            DynamicImage::ImageRgb32F(hdr_buffer)
                .save(&path)
                .map_err(|source| ImageIoError::WriteFailed { path: path.clone(), source })
        }
        "png" | "jpg" | "jpeg" | "bmp" | "tga" => {
            let ldr = tonemap_to_ldr(width, height, linear);
            ldr.save(&path).map_err(|source| ImageIoError::WriteFailed { path: path.clone(), source })
        }
        other => Err(ImageIoError::UnsupportedExtension { path, extension: other.to_string() }),
    }
}

const GAMMA: f32 = 2.2;

fn tonemap_to_ldr(width: u32, height: u32, linear: &[f32]) -> RgbImage {
    let mut buf = RgbImage::new(width, height);
    for (i, px) in buf.pixels_mut().enumerate() {
        let base = i * 3;
        let r = linear[base].clamp(0.0, 1.0).powf(1.0 / GAMMA);
        let g = linear[base + 1].clamp(0.0, 1.0).powf(1.0 / GAMMA);
        let b = linear[base + 2].clamp(0.0, 1.0).powf(1.0 / GAMMA);
        *px = Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonemap_clamps_out_of_range_values() {
        let linear = vec![2.0, -1.0, 0.5];
        let ldr = tonemap_to_ldr(1, 1, &linear);
        let px = ldr.get_pixel(0, 0);
        assert_eq!(px[0], 255);
        assert_eq!(px[1], 0);
    }
}
