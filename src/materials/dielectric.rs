use rand::Rng;

use crate::{materials::Scatter, math::Color, objects::HitRecord, ray::Ray};

/// A perfectly clear refractive material (glass, water, ...). Attenuation is
/// always white — it never absorbs.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    refraction_index: f32,
}

impl Dielectric {
    pub fn new(refraction_index: f32) -> Dielectric {
        Dielectric { refraction_index }
    }

    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
        let eta = if rec.front_face { 1.0 / self.refraction_index } else { self.refraction_index };

        let unit_direction = r_in.direction().unit_vector();
        let cos_theta = (-unit_direction).dot(&rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = eta * sin_theta > 1.0;
        let direction = if cannot_refract || reflectance(cos_theta, eta) > rng.random::<f32>() {
            unit_direction.reflect(&rec.normal)
        } else {
            unit_direction.refract(&rec.normal, eta)
        };

        Some(Scatter { attenuation: Color::WHITE, scattered: Ray::new(rec.point, direction, r_in.time()) })
    }

    pub fn emitted(&self, _u: f32, _v: f32, _p: &crate::math::Point3) -> Color {
        Color::BLACK
    }
}

/// Schlick's approximation to the Fresnel reflectance.
pub fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schlick_bounds_and_monotonicity() {
        let eta: f32 = 1.5;
        let r0 = ((1.0 - eta) / (1.0 + eta)).powi(2);
        assert!((reflectance(1.0, eta) - r0).abs() < 1e-6);
        assert!((reflectance(0.0, eta) - 1.0).abs() < 1e-6);

        let mid = reflectance(0.5, eta);
        assert!(mid > r0 && mid < 1.0);
    }

    #[test]
    fn dielectric_never_absorbs_statistically() {
        use crate::math::{Point3, Vec3};
        use rand::{rngs::StdRng, SeedableRng};

        let glass = Dielectric::new(1.5);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sum = Color::BLACK;

        for _ in 0..10_000 {
            let rec = HitRecord {
                point: Point3::ZERO,
                normal: Vec3::new(0.0, 0.0, 1.0),
                t: 1.0,
                u: 0.0,
                v: 0.0,
                front_face: true,
                material: std::sync::Arc::new(crate::materials::Materials::Dielectric(glass)),
            };
            let r_in = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
            let scatter = glass.scatter(&r_in, &rec, &mut rng).unwrap();
            sum += scatter.attenuation;
        }

        assert!((sum.x - 10_000.0).abs() < 1e-2);
        assert!((sum.y - 10_000.0).abs() < 1e-2);
        assert!((sum.z - 10_000.0).abs() < 1e-2);
    }
}
