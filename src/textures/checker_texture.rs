use std::sync::Arc;

use crate::{math::{Color, Point3}, textures::Textures};

/// A two-color checker pattern tiled in uv space (not world space): the
/// parity of `floor(u*scale) + floor(v*scale)` selects even or odd.
#[derive(Clone)]
pub struct CheckerTexture {
    scale: f32,
    even: Arc<Textures>,
    odd: Arc<Textures>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<Textures>, odd: Arc<Textures>) -> CheckerTexture {
        CheckerTexture { scale, even, odd }
    }

    pub fn value(&self, u: f32, v: f32, p: &Point3) -> Color {
        let x = (u * self.scale).floor() as i64;
        let y = (v * self.scale).floor() as i64;
        if (x + y) % 2 != 0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}
