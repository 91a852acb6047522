use nalgebra::{UnitQuaternion, Vector3};

use crate::{aabb::Aabb, interval::Interval, math::Vec3, objects::HitRecord, objects::Hittables, ray::Ray};

fn to_nalgebra(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

fn from_nalgebra(v: Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Wraps a hittable with a rotation about its bounding-box center, applied
/// by rotating the incoming ray into the inner object's local frame and
/// rotating the resulting hit point/normal back by the inverse quaternion.
#[derive(Clone)]
pub struct Rotate {
    inner: Hittables,
    rotation: UnitQuaternion<f32>,
    center: Vec3,
    bbox: Aabb,
}

impl Rotate {
    pub fn new(inner: Hittables, rotation: UnitQuaternion<f32>, time0: f32, time1: f32) -> Rotate {
        let inner_box = inner.bounding_box(time0, time1);
        let center = Vec3::new(
            (inner_box.x.min + inner_box.x.max) / 2.0,
            (inner_box.y.min + inner_box.y.max) / 2.0,
            (inner_box.z.min + inner_box.z.max) / 2.0,
        );

        let corners: Vec<Vec3> = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { inner_box.x.min } else { inner_box.x.max },
                    if i & 2 == 0 { inner_box.y.min } else { inner_box.y.max },
                    if i & 4 == 0 { inner_box.z.min } else { inner_box.z.max },
                )
            })
            .collect();

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in corners {
            let rotated = from_nalgebra(rotation * to_nalgebra(corner - center)) + center;
            min = Vec3::new(min.x.min(rotated.x), min.y.min(rotated.y), min.z.min(rotated.z));
            max = Vec3::new(max.x.max(rotated.x), max.y.max(rotated.y), max.z.max(rotated.z));
        }

        Rotate { inner, rotation, center, bbox: Aabb::from_points(min, max) }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let inverse = self.rotation.inverse();

        let local_origin = from_nalgebra(self.rotation * to_nalgebra(r.origin() - self.center)) + self.center;
        let local_direction = from_nalgebra(self.rotation * to_nalgebra(r.direction()));
        let local_ray = Ray::new(local_origin, local_direction, r.time());

        let mut rec = self.inner.hit(&local_ray, ray_t)?;

        rec.point = from_nalgebra(inverse * to_nalgebra(rec.point - self.center)) + self.center;
        rec.normal = from_nalgebra(inverse * to_nalgebra(rec.normal));
        Some(rec)
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{lambertian::Lambertian, Materials};
    use crate::math::Point3;
    use crate::objects::sphere::Sphere;
    use crate::textures::{solid_color::SolidColor, Textures};
    use std::sync::Arc;

    fn dummy_material() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Arc::new(Textures::SolidColor(
            SolidColor::new(Vec3::new(0.5, 0.5, 0.5)),
        )))))
    }

    #[test]
    fn rotate_then_inverse_is_identity_for_a_sphere() {
        // A sphere is rotationally symmetric, so this also exercises the
        // general machinery without depending on an asymmetric primitive.
        let inner = Hittables::Sphere(Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, dummy_material()));
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.7);
        let forward = Rotate::new(inner.clone(), q, 0.0, 1.0);
        let round_trip = Rotate::new(Hittables::Rotate(Box::new(forward)), q.inverse(), 0.0, 1.0);

        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
        let expected = inner.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        let actual = round_trip.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((expected.t - actual.t).abs() < 1e-4);
    }

    /// A round trip can't tell forward and inverse apart since it composes
    /// both directions. This one wraps a single asymmetric, off-center
    /// triangle in one 90-degree rotation about Y and checks against a
    /// hand-solved hit. With the ray/output rotations swapped, the same ray
    /// lands outside the triangle's footprint entirely (local x = 1.7 at
    /// y = 1.4, past the x + y <= 2 edge) and this test reports a miss.
    #[test]
    fn rotate_hits_an_off_center_triangle_at_the_hand_solved_point() {
        use crate::objects::triangle::Triangle;

        let inner = Hittables::Triangle(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            dummy_material(),
        ));
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f32::consts::FRAC_PI_2);
        let rotated = Rotate::new(inner, q, 0.0, 1.0);

        let r = Ray::new(Point3::new(-1.0, 1.4, 1.3), Vec3::new(1.0, 0.0, -1.0), 0.0);
        let rec = rotated.hit(&r, Interval::new(0.001, f32::INFINITY)).expect("ray must hit the rotated triangle");

        assert!((rec.t - 2.0).abs() < 1e-4);
        assert!((rec.point - Vec3::new(1.0, 1.4, -0.7)).length() < 1e-4);
        assert!((rec.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-4);
    }
}
