use strum_macros::EnumIter;

use crate::{interval::Interval, math::Point3, ray::Ray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Axis-aligned bounding box, stored as one interval per axis.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb { x: Interval::EMPTY, y: Interval::EMPTY, z: Interval::EMPTY };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Aabb {
        Aabb { x, y, z }
    }

    pub fn from_points(a: Point3, b: Point3) -> Aabb {
        Aabb::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    pub fn union(a: &Aabb, b: &Aabb) -> Aabb {
        Aabb::new(
            Interval::from_intervals(&a.x, &b.x),
            Interval::from_intervals(&a.y, &b.y),
            Interval::from_intervals(&a.z, &b.z),
        )
    }

    pub fn axis_interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn min_on(&self, axis: Axis) -> f32 {
        self.axis_interval(axis).min
    }

    /// Slab-method ray/box intersection; narrows `ray_t` on each axis.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let origin = r.origin();
        let direction = r.direction();

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let ax = self.axis_interval(axis);
            let adinv = 1.0 / direction[axis as usize];

            let mut t0 = (ax.min - origin[axis as usize]) * adinv;
            let mut t1 = (ax.max - origin[axis as usize]) * adinv;

            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = ray_t.min.max(t0);
            ray_t.max = ray_t.max.min(t1);

            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }

    /// Pad a degenerate (zero-width) axis so the box can be safely used in a
    /// BVH split; axis-aligned rectangles call this on their constant axis.
    pub fn pad_degenerate(self) -> Aabb {
        const DELTA: f32 = 1e-3;
        Aabb::new(self.x.pad(DELTA), self.y.pad(DELTA), self.z.pad(DELTA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn union_is_commutative_and_idempotent() {
        let a = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(0.5, 0.5, 0.5));

        let ab = Aabb::union(&a, &b);
        let ba = Aabb::union(&b, &a);
        assert_eq!((ab.x.min, ab.x.max), (ba.x.min, ba.x.max));
        assert_eq!((ab.y.min, ab.y.max), (ba.y.min, ba.y.max));
        assert_eq!((ab.z.min, ab.z.max), (ba.z.min, ba.z.max));

        let aa = Aabb::union(&a, &a);
        assert_eq!((aa.x.min, aa.x.max), (a.x.min, a.x.max));
    }

    #[test]
    fn hit_detects_axis_aligned_ray() {
        let b = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let r = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(b.hit(&r, Interval::new(0.001, f32::INFINITY)));

        let miss = Ray::new(Vec3::new(5.0, 5.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0);
        assert!(!b.hit(&miss, Interval::new(0.001, f32::INFINITY)));
    }
}
