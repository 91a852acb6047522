use std::sync::Arc;

use rand::Rng;

use crate::{materials::Scatter, math::{Color, Point3}, objects::HitRecord, ray::Ray, textures::Textures};

/// A pure emitter. Never scatters; `emitted()` returns the texture's value
/// at the hit point.
#[derive(Clone)]
pub struct DiffuseLight {
    emit: Arc<Textures>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<Textures>) -> DiffuseLight {
        DiffuseLight { emit }
    }

    pub fn scatter(&self, _r_in: &Ray, _rec: &HitRecord, _rng: &mut impl Rng) -> Option<Scatter> {
        None
    }

    pub fn emitted(&self, u: f32, v: f32, p: &Point3) -> Color {
        self.emit.value(u, v, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::textures::solid_color::SolidColor;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn never_scatters() {
        let mut rng = StdRng::seed_from_u64(6);
        let light = DiffuseLight::new(Arc::new(Textures::SolidColor(SolidColor::new(Vec3::new(4.0, 4.0, 4.0)))));
        let rec = HitRecord {
            point: Point3::ZERO,
            normal: Vec3::new(0.0, 1.0, 0.0),
            t: 1.0,
            u: 0.0,
            v: 0.0,
            front_face: true,
            material: Arc::new(crate::materials::Materials::DiffuseLight(light.clone())),
        };
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0), 0.0);
        assert!(light.scatter(&r, &rec, &mut rng).is_none());
    }
}
