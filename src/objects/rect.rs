use std::sync::Arc;

use crate::{aabb::Aabb, interval::Interval, materials::Materials, math::Point3, math::Vec3, objects::HitRecord, ray::Ray};

/// Which coordinate plane an axis-aligned rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectPlane {
    Xy,
    Xz,
    Yz,
}

/// A rectangle in one of the three coordinate planes, at constant coordinate
/// `k`, spanning `[a0,a1] x [b0,b1]` in the plane's in-plane axes.
#[derive(Clone)]
pub struct AaRect {
    plane: RectPlane,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    material: Arc<Materials>,
}

impl AaRect {
    pub fn new(plane: RectPlane, a0: f32, a1: f32, b0: f32, b1: f32, k: f32, material: Arc<Materials>) -> AaRect {
        AaRect { plane, a0, a1, b0, b1, k, material }
    }

    fn outward_normal(&self) -> Vec3 {
        match self.plane {
            RectPlane::Xy => Vec3::new(0.0, 0.0, 1.0),
            RectPlane::Xz => Vec3::new(0.0, 1.0, 0.0),
            RectPlane::Yz => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Returns `(k_coord, a_coord, b_coord)` of the ray's origin/direction,
    /// i.e. which scalar varies along the rectangle's constant axis vs. the
    /// two in-plane axes.
    fn axes(&self, v: Vec3) -> (f32, f32, f32) {
        match self.plane {
            RectPlane::Xy => (v.z, v.x, v.y),
            RectPlane::Xz => (v.y, v.x, v.z),
            RectPlane::Yz => (v.x, v.y, v.z),
        }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let (ok, od_a, od_b) = self.axes(r.origin());
        let (kd, dd_a, dd_b) = self.axes(r.direction());

        if kd.abs() < 1e-8 {
            return None;
        }
        let t = (self.k - ok) / kd;
        if !ray_t.surrounds(t) {
            return None;
        }

        let a = od_a + t * dd_a;
        let b = od_b + t * dd_b;
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return None;
        }

        let u = (a - self.a0) / (self.a1 - self.a0);
        let v = (b - self.b0) / (self.b1 - self.b0);
        let point = r.at(t);
        Some(HitRecord::new(r, point, self.outward_normal(), t, u, v, self.material.clone()))
    }

    pub fn bounding_box(&self) -> Aabb {
        let (min, max) = match self.plane {
            RectPlane::Xy => (
                Point3::new(self.a0, self.b0, self.k),
                Point3::new(self.a1, self.b1, self.k),
            ),
            RectPlane::Xz => (
                Point3::new(self.a0, self.k, self.b0),
                Point3::new(self.a1, self.k, self.b1),
            ),
            RectPlane::Yz => (
                Point3::new(self.k, self.a0, self.b0),
                Point3::new(self.k, self.a1, self.b1),
            ),
        };
        Aabb::from_points(min, max).pad_degenerate()
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
    fn xy_rect_hit_inside_bounds() {
        let rect = AaRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 0.0, dummy_material());
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = rect.hit(&r, Interval::new(0.001, f32::INFINITY)).expect("must hit");
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn xy_rect_miss_outside_bounds() {
        let rect = AaRect::new(RectPlane::Xy, -1.0, 1.0, -1.0, 1.0, 0.0, dummy_material());
        let r = Ray::new(Point3::new(5.0, 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(rect.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn bounding_box_is_padded_on_constant_axis() {
        let rect = AaRect::new(RectPlane::Xz, -1.0, 1.0, -2.0, 2.0, 3.0, dummy_material());
        let bbox = rect.bounding_box();
        assert!(bbox.y.size() > 0.0);
    }
}
