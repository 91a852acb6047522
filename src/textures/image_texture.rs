use crate::{asset_loader::img_loader::RtwImage, error::ImageIoError, math::{Color, Point3}};

/// A texture backed by a decoded image, sampled bilinearly (or by nearest
/// neighbor when the driver's `bilinear_filter` option is disabled).
#[derive(Clone)]
pub struct ImageTexture {
    image: RtwImage,
    bilinear: bool,
}

impl ImageTexture {
    pub fn load(path: &str, bilinear: bool) -> Result<ImageTexture, ImageIoError> {
        Ok(ImageTexture { image: RtwImage::load(path)?, bilinear })
    }

    pub fn value(&self, u: f32, v: f32, _p: &Point3) -> Color {
        if self.bilinear {
            self.image.sample_bilinear(u, v)
        } else {
            self.image.sample_nearest(u, v)
        }
    }
}
