use rand::Rng;

use crate::{materials::Scatter, math::{Color, Vec3}, objects::HitRecord, ray::Ray};

/// A reflective material with fuzzed reflection; `fuzz` must be in `[0,1]`.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f32) -> Metal {
        assert!((0.0..=1.0).contains(&fuzz), "fuzz must be in [0,1], got {fuzz}");
        Metal { albedo, fuzz }
    }

    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
        let reflected = r_in.direction().unit_vector().reflect(&rec.normal);
        let fuzzed = reflected + Vec3::random_in_unit_sphere(rng) * self.fuzz;
        let scattered = Ray::new(rec.point, fuzzed, r_in.time());

        if scattered.direction().dot(&rec.normal) > 0.0 {
            Some(Scatter { attenuation: self.albedo, scattered })
        } else {
            None
        }
    }

    pub fn emitted(&self, _u: f32, _v: f32, _p: &crate::math::Point3) -> Color {
        Color::BLACK
    }
}
