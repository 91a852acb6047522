pub mod checker_texture;
pub mod image_texture;
pub mod perlin;
pub mod solid_color;

use crate::math::{Color, Point3};

use checker_texture::CheckerTexture;
use image_texture::ImageTexture;
use perlin::NoiseTexture;
use solid_color::SolidColor;

#[derive(Clone)]
pub enum Textures {
    SolidColor(SolidColor),
    CheckerTexture(CheckerTexture),
    ImageTexture(ImageTexture),
    NoiseTexture(NoiseTexture),
}

impl Textures {
    pub fn value(&self, u: f32, v: f32, p: &Point3) -> Color {
        match self {
            Textures::SolidColor(s) => s.value(u, v, p),
            Textures::CheckerTexture(c) => c.value(u, v, p),
            Textures::ImageTexture(i) => i.value(u, v, p),
            Textures::NoiseTexture(n) => n.value(u, v, p),
        }
    }
}
