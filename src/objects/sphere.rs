use std::sync::Arc;

use crate::{
    aabb::Aabb, interval::Interval, materials::Materials, math::PI, math::Point3, math::Vec3,
    objects::HitRecord, ray::Ray,
};

/// A sphere. Negative radii are allowed — they flip the outward normal and
/// are used to model hollow glass (a dielectric sphere nested inside a
/// slightly larger one with negative radius).
#[derive(Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<Materials>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, material: Arc<Materials>) -> Sphere {
        Sphere { center, radius, material }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = r.origin() - self.center;
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
        let outward_normal = (point - self.center) / self.radius;
        let (u, v) = sphere_uv(&outward_normal);
        Some(HitRecord::new(r, point, outward_normal, root, u, v, self.material.clone()))
    }

    pub fn bounding_box(&self) -> Aabb {
        let rad = Vec3::splat(self.radius.abs());
        Aabb::from_points(self.center - rad, self.center + rad)
    }
}

/// `p` is a point on the unit sphere. `u = (atan2(-p.z,p.x)+pi)/(2pi)`,
/// `v = acos(-p.y)/pi`.
pub fn sphere_uv(p: &Vec3) -> (f32, f32) {
    let theta = (-p.y).acos();
    let phi = (-p.z).atan2(p.x) + PI;
    (phi / (2.0 * PI), theta / PI)
}
