use std::sync::Arc;

use crate::{
    aabb::Aabb, interval::Interval, materials::Materials, math::Point3, math::Vec3,
    objects::sphere::sphere_uv, objects::HitRecord, ray::Ray,
};

/// A sphere whose center moves linearly between `center0` (at `time0`) and
/// `center1` (at `time1`); evaluated at the ray's shutter time.
#[derive(Clone)]
pub struct MovingSphere {
    center0: Point3,
    center1: Point3,
    time0: f32,
    time1: f32,
    radius: f32,
    material: Arc<Materials>,
}

impl MovingSphere {
    pub fn new(
        center0: Point3,
        center1: Point3,
        time0: f32,
        time1: f32,
        radius: f32,
        material: Arc<Materials>,
    ) -> MovingSphere {
        MovingSphere { center0, center1, time0, time1, radius, material }
    }

    pub fn center(&self, time: f32) -> Point3 {
        let t = (time - self.time0) / (self.time1 - self.time0);
        self.center0 + (self.center1 - self.center0) * t
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let center = self.center(r.time());
        let oc = r.origin() - center;
        let a = r.direction().length_squared();
        let h = oc.dot(&r.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let mut root = (-h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = r.at(root);
        let outward_normal = (point - center) / self.radius;
        let (u, v) = sphere_uv(&outward_normal);
        Some(HitRecord::new(r, point, outward_normal, root, u, v, self.material.clone()))
    }

    /// Union of the bounding boxes at both endpoint times.
    pub fn bounding_box(&self, _time0: f32, _time1: f32) -> Aabb {
        let rad = Vec3::splat(self.radius.abs());
        let box0 = Aabb::from_points(self.center0 - rad, self.center0 + rad);
        let box1 = Aabb::from_points(self.center1 - rad, self.center1 + rad);
        Aabb::union(&box0, &box1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::textures::{solid_color::SolidColor, Textures};

    fn dummy_material() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Arc::new(Textures::SolidColor(
            SolidColor::new(Vec3::new(0.5, 0.5, 0.5)),
        )))))
    }

    #[test]
    fn center_interpolates_linearly() {
        let s = MovingSphere::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            0.0,
            1.0,
            0.5,
            dummy_material(),
        );
        assert_eq!(s.center(0.5), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn bounding_box_covers_both_endpoints() {
        let s = MovingSphere::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            0.0,
            1.0,
            0.5,
            dummy_material(),
        );
        let bbox = s.bounding_box(0.0, 1.0);
        assert!(bbox.x.min <= -0.5 + 1e-5);
        assert!(bbox.x.max >= 2.5 - 1e-5);
    }
}
