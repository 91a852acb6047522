use std::sync::Arc;

use crate::{aabb::Aabb, interval::Interval, materials::Materials, math::Point3, objects::HitRecord, ray::Ray};

const PARALLEL_EPSILON: f32 = 1e-6;

/// A triangle stored as three vertices plus a precomputed face normal.
#[derive(Clone)]
pub struct Triangle {
    v0: Point3,
    v1: Point3,
    v2: Point3,
    normal: Point3,
    material: Arc<Materials>,
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3, material: Arc<Materials>) -> Triangle {
        let normal = (v1 - v0).cross(&(v2 - v0)).unit_vector();
        Triangle { v0, v1, v2, normal, material }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let n_dot_d = self.normal.dot(&r.direction());
        if n_dot_d.abs() < PARALLEL_EPSILON {
            return None;
        }

        let d = -self.normal.dot(&self.v0);
        let t = -(self.normal.dot(&r.origin()) + d) / n_dot_d;
        if !ray_t.surrounds(t) {
            return None;
        }

        let point = r.at(t);

        let edge0 = self.v1 - self.v0;
        let vp0 = point - self.v0;
        let c0 = edge0.cross(&vp0);
        if self.normal.dot(&c0) < 0.0 {
            return None;
        }

        let edge1 = self.v2 - self.v1;
        let vp1 = point - self.v1;
        let c1 = edge1.cross(&vp1);
        let u_raw = self.normal.dot(&c1);
        if u_raw < 0.0 {
            return None;
        }

        let edge2 = self.v0 - self.v2;
        let vp2 = point - self.v2;
        let c2 = edge2.cross(&vp2);
        let v_raw = self.normal.dot(&c2);
        if v_raw < 0.0 {
            return None;
        }

        let area2 = self.normal.dot(&edge0.cross(&(self.v2 - self.v0))).abs();
        let u = u_raw / area2;
        let v = v_raw / area2;

        Some(HitRecord::new(r, point, self.normal, t, u, v, self.material.clone()))
    }

    pub fn bounding_box(&self) -> Aabb {
        let min = Aabb::from_points(self.v0, self.v1);
        Aabb::union(&min, &Aabb::from_points(self.v2, self.v2)).pad_degenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::math::Vec3;
    use crate::textures::{solid_color::SolidColor, Textures};

    fn dummy_material() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Arc::new(Textures::SolidColor(
            SolidColor::new(Vec3::new(0.5, 0.5, 0.5)),
        )))))
    }

    #[test]
    fn ray_through_center_hits() {
        let t = Triangle::new(
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            dummy_material(),
        );
        let r = Ray::new(Point3::new(0.0, -0.3, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = t.hit(&r, Interval::new(0.001, f32::INFINITY));
        assert!(rec.is_some());
    }

    #[test]
    fn near_parallel_ray_rejected() {
        let t = Triangle::new(
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            dummy_material(),
        );
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0), 0.0);
        assert!(t.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn ray_outside_triangle_misses() {
        let t = Triangle::new(
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            dummy_material(),
        );
        let r = Ray::new(Point3::new(5.0, 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        assert!(t.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }
}
