use crate::{aabb::Aabb, interval::Interval, objects::HitRecord, objects::Hittables, ray::Ray};

/// Sequential container of hittables. Traversal shrinks `t_max` to the
/// closest confirmed hit so later children can only improve on it.
#[derive(Clone, Default)]
pub struct HittableList {
    objects: Vec<Hittables>,
}

impl HittableList {
    pub fn new() -> HittableList {
        HittableList { objects: Vec::new() }
    }

    pub fn add(&mut self, object: Hittables) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Hittables] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<Hittables> {
        self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest = ray_t.max;
        let mut result = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest)) {
                closest = rec.t;
                result = Some(rec);
            }
        }
        result
    }

    pub fn bounding_box(&self, time0: f32, time1: f32) -> Aabb {
        self.objects
            .iter()
            .map(|o| o.bounding_box(time0, time1))
            .fold(Aabb::EMPTY, |acc, b| Aabb::union(&acc, &b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{lambertian::Lambertian, Materials};
    use crate::math::{Point3, Vec3};
    use crate::objects::sphere::Sphere;
    use crate::textures::{solid_color::SolidColor, Textures};
    use std::sync::Arc;

    fn dummy_material() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Arc::new(Textures::SolidColor(
            SolidColor::new(Vec3::new(0.5, 0.5, 0.5)),
        )))))
    }

    #[test]
    fn returns_closest_hit_among_children() {
        let mut list = HittableList::new();
        list.add(Hittables::Sphere(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, dummy_material())));
        list.add(Hittables::Sphere(Sphere::new(Point3::new(0.0, 0.0, -2.0), 1.0, dummy_material())));

        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0);
        let rec = list.hit(&r, Interval::new(0.001, f32::INFINITY)).expect("must hit");
        assert!((rec.t - 1.0).abs() < 1e-5);
    }
}
