mod vec3;
mod vec4;

pub use vec3::{Point3, Vec3};
pub use vec4::{Color, Vec4};

pub const PI: f32 = std::f32::consts::PI;

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}
