use crate::math::{Color, Point3, Vec3};

/// A texture that always returns the same color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(rgb: Vec3) -> SolidColor {
        SolidColor { albedo: Color::rgb(rgb.x, rgb.y, rgb.z) }
    }

    pub fn value(&self, _u: f32, _v: f32, _p: &Point3) -> Color {
        self.albedo
    }
}
