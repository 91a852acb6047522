pub mod aabox;
pub mod bvh;
pub mod hittable_list;
pub mod moving_sphere;
pub mod rect;
pub mod rotate;
pub mod sphere;
pub mod translate;
pub mod triangle;

use std::sync::Arc;

use crate::{
    aabb::Aabb,
    interval::Interval,
    materials::Materials,
    math::Point3,
    math::Vec3,
    ray::Ray,
};

use aabox::AaBox;
use bvh::BvhNode;
use hittable_list::HittableList;
use moving_sphere::MovingSphere;
use rect::AaRect;
use rotate::Rotate;
use sphere::Sphere;
use translate::Translate;
use triangle::Triangle;

/// Intersection result: surface point, oriented normal, parametric `t`,
/// surface uv and the material at the hit point.
#[derive(Clone)]
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
    pub t: f32,
    pub u: f32,
    pub v: f32,
    pub front_face: bool,
    pub material: Arc<Materials>,
}

impl HitRecord {
    /// Builds a hit record, orienting `outward_normal` (assumed unit length)
    /// against the ray per the front-face invariant.
    pub fn new(
        ray: &Ray,
        point: Point3,
        outward_normal: Vec3,
        t: f32,
        u: f32,
        v: f32,
        material: Arc<Materials>,
    ) -> HitRecord {
        let front_face = ray.direction().dot(&outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        HitRecord { point, normal, t, u, v, front_face, material }
    }
}

/// A closed set of scene-graph node variants, dispatched by match rather
/// than through a trait object so the leaf geometry stays monomorphized.
#[derive(Clone)]
pub enum Hittables {
    Sphere(Sphere),
    MovingSphere(MovingSphere),
    Triangle(Triangle),
    AaRect(AaRect),
    AaBox(AaBox),
    List(HittableList),
    Bvh(Arc<BvhNode>),
    Translate(Box<Translate>),
    Rotate(Box<Rotate>),
}

impl Hittables {
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Hittables::Sphere(s) => s.hit(r, ray_t),
            Hittables::MovingSphere(s) => s.hit(r, ray_t),
            Hittables::Triangle(t) => t.hit(r, ray_t),
            Hittables::AaRect(rect) => rect.hit(r, ray_t),
            Hittables::AaBox(b) => b.hit(r, ray_t),
            Hittables::List(l) => l.hit(r, ray_t),
            Hittables::Bvh(b) => b.hit(r, ray_t),
            Hittables::Translate(t) => t.hit(r, ray_t),
            Hittables::Rotate(rot) => rot.hit(r, ray_t),
        }
    }

    pub fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        match self {
            Hittables::Sphere(s) => s.bounding_box(),
            Hittables::MovingSphere(s) => s.bounding_box(time0, time1),
            Hittables::Triangle(t) => t.bounding_box(),
            Hittables::AaRect(rect) => rect.bounding_box(),
            Hittables::AaBox(b) => b.bounding_box(),
            Hittables::List(l) => l.bounding_box(time0, time1),
            Hittables::Bvh(b) => b.bounding_box(),
            Hittables::Translate(t) => t.bounding_box(time0, time1),
            Hittables::Rotate(rot) => rot.bounding_box(),
        }
    }
}
