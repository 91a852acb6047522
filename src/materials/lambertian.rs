use std::sync::Arc;

use rand::Rng;

use crate::{materials::Scatter, math::{Color, Vec3}, objects::HitRecord, ray::Ray, textures::Textures};

/// Diffuse material. Always scatters toward `normal + random_unit_vector()`,
/// falling back to the normal itself if that sum is degenerate.
#[derive(Clone)]
pub struct Lambertian {
    albedo: Arc<Textures>,
}

impl Lambertian {
    pub fn new(albedo: Arc<Textures>) -> Lambertian {
        Lambertian { albedo }
    }

    pub fn scatter(&self, _r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
        let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }

        let attenuation = self.albedo.value(rec.u, rec.v, &rec.point);
        Some(Scatter { attenuation, scattered: Ray::new(rec.point, scatter_direction, _r_in.time()) })
    }

    pub fn emitted(&self, _u: f32, _v: f32, _p: &crate::math::Point3) -> Color {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::textures::solid_color::SolidColor;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn always_scatters() {
        let mut rng = StdRng::seed_from_u64(3);
        let lambertian = Lambertian::new(Arc::new(Textures::SolidColor(SolidColor::new(Vec3::new(0.5, 0.5, 0.5)))));
        let rec = HitRecord {
            point: Point3::ZERO,
            normal: Vec3::new(0.0, 1.0, 0.0),
            t: 1.0,
            u: 0.0,
            v: 0.0,
            front_face: true,
            material: Arc::new(crate::materials::Materials::Lambertian(lambertian.clone())),
        };
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 0.0);
        assert!(lambertian.scatter(&r, &rec, &mut rng).is_some());
    }
}
