use crate::{aabb::Aabb, interval::Interval, math::Vec3, objects::HitRecord, objects::Hittables, ray::Ray};

/// Wraps a hittable, offsetting it in world space by translating the ray
/// into the inner object's local space instead of transforming geometry.
#[derive(Clone)]
pub struct Translate {
    inner: Hittables,
    offset: Vec3,
}

impl Translate {
    pub fn new(inner: Hittables, offset: Vec3) -> Translate {
        Translate { inner, offset }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let moved = Ray::new(r.origin() - self.offset, r.direction(), r.time());
        let mut rec = self.inner.hit(&moved, ray_t)?;
        rec.point += self.offset;
        Some(rec)
    }

    pub fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        let inner_box = self.inner.bounding_box(time0, time1);
        Aabb::from_points(inner_box_min(&inner_box) + self.offset, inner_box_max(&inner_box) + self.offset)
    }
}

fn inner_box_min(b: &Aabb) -> Vec3 {
    Vec3::new(b.x.min, b.y.min, b.z.min)
}

fn inner_box_max(b: &Aabb) -> Vec3 {
    Vec3::new(b.x.max, b.y.max, b.z.max)
}
