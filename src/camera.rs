use rand::Rng;

use crate::{math::{degrees_to_radians, Point3, Vec3}, ray::Ray};

/// Thin-lens pinhole camera with optional defocus blur and shutter-time
/// motion blur. Immutable once built; shared across render worker threads.
#[derive(Clone, Copy)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
    shutter_open: f32,
    shutter_close: f32,
}

pub struct CameraSettings {
    pub look_from: Point3,
    pub look_at: Point3,
    pub up: Vec3,
    pub vertical_fov_degrees: f32,
    pub aspect_ratio: f32,
    pub aperture: f32,
    pub focus_distance: f32,
    pub shutter_open: f32,
    pub shutter_close: f32,
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Camera {
        let theta = degrees_to_radians(settings.vertical_fov_degrees);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * settings.focus_distance;
        let viewport_width = settings.aspect_ratio * viewport_height;

        let w = (settings.look_from - settings.look_at).unit_vector();
        let u = settings.up.cross(&w).unit_vector();
        let v = w.cross(&u);

        let origin = settings.look_from;
        let horizontal = u * viewport_width;
        let vertical = v * viewport_height;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w * settings.focus_distance;

        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: settings.aperture / 2.0,
            shutter_open: settings.shutter_open,
            shutter_close: settings.shutter_close,
        }
    }

    /// Builds a primary ray for normalized screen coordinates `(s,t) in [0,1]^2`.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut impl Rng) -> Ray {
        let rd = Vec3::random_in_unit_disk(rng) * self.lens_radius;
        let offset = self.u * rd.x + self.v * rd.y;

        let time = if self.shutter_close > self.shutter_open {
            rng.random_range(self.shutter_open..self.shutter_close)
        } else {
            self.shutter_open
        };

        let direction =
            self.lower_left_corner + self.horizontal * s + self.vertical * t - self.origin - offset;
        Ray::new(self.origin + offset, direction, time)
    }
}
