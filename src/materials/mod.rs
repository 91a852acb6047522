pub mod dielectric;
pub mod diffuse_light;
pub mod lambertian;
pub mod metal;

use rand::Rng;

use crate::{math::{Color, Point3}, objects::HitRecord, ray::Ray};

use dielectric::Dielectric;
use diffuse_light::DiffuseLight;
use lambertian::Lambertian;
use metal::Metal;

/// The result of a material scattering an incoming ray: the attenuation to
/// apply to the recursive estimate, and the next ray to trace.
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Closed set of material variants, dispatched by match.
#[derive(Clone)]
pub enum Materials {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
}

impl Materials {
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
        match self {
            Materials::Lambertian(l) => l.scatter(r_in, rec, rng),
            Materials::Metal(m) => m.scatter(r_in, rec, rng),
            Materials::Dielectric(d) => d.scatter(r_in, rec, rng),
            Materials::DiffuseLight(d) => d.scatter(r_in, rec, rng),
        }
    }

    pub fn emitted(&self, u: f32, v: f32, p: &Point3) -> Color {
        match self {
            Materials::Lambertian(l) => l.emitted(u, v, p),
            Materials::Metal(m) => m.emitted(u, v, p),
            Materials::Dielectric(d) => d.emitted(u, v, p),
            Materials::DiffuseLight(d) => d.emitted(u, v, p),
        }
    }
}
