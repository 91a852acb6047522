use std::sync::Arc;

use crate::{
    aabb::Aabb,
    interval::Interval,
    materials::Materials,
    math::Point3,
    objects::{
        hittable_list::HittableList,
        rect::{AaRect, RectPlane},
        HitRecord, Hittables,
    },
    ray::Ray,
};

/// An axis-aligned box, built from the six rectangles that bound it. The box
/// is closed-form only along the axes it was constructed with; arbitrary
/// instance rotation is applied by wrapping the whole box in `Rotate`.
#[derive(Clone)]
pub struct AaBox {
    min: Point3,
    max: Point3,
    sides: HittableList,
}

impl AaBox {
    pub fn new(min: Point3, max: Point3, material: Arc<Materials>) -> AaBox {
        let mut sides = HittableList::new();

        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Xy, min.x, max.x, min.y, max.y, max.z, material.clone(),
        )));
        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Xy, min.x, max.x, min.y, max.y, min.z, material.clone(),
        )));
        // XZ faces: in-plane intervals are (min.x,max.x,min.z,max.z) — derived
        // independently from the XY mapping above, not copied from it.
        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Xz, min.x, max.x, min.z, max.z, max.y, material.clone(),
        )));
        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Xz, min.x, max.x, min.z, max.z, min.y, material.clone(),
        )));
        // YZ faces: in-plane intervals are (min.y,max.y,min.z,max.z).
        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Yz, min.y, max.y, min.z, max.z, max.x, material.clone(),
        )));
        sides.add(Hittables::AaRect(AaRect::new(
            RectPlane::Yz, min.y, max.y, min.z, max.z, min.x, material,
        )));

        AaBox { min, max, sides }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.sides.hit(r, ray_t)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.min, self.max)
    }
}
