use rand::Rng;

use crate::{interval::Interval, math::{Color, Vec3}, objects::Hittables, ray::Ray};

/// The background radiance used when a ray escapes the scene. Selected per
/// scene builder, not per ray.
#[derive(Clone, Copy)]
pub enum Background {
    Black,
    GradientSky,
}

impl Background {
    pub fn radiance(&self, ray: &Ray) -> Color {
        match self {
            Background::Black => Color::BLACK,
            Background::GradientSky => {
                let unit_direction = ray.direction().unit_vector();
                let a = 0.5 * (unit_direction.y + 1.0);
                Color::lerp(Color::WHITE, Color::rgb(0.5, 0.7, 1.0), a)
            }
        }
    }
}

const SHADOW_ACNE_EPSILON: f32 = 1e-3;

/// Bounded-depth recursive Monte-Carlo radiance estimator: on hit, adds the
/// surface's emission and recurses on the scattered ray weighted by
/// attenuation, until `depth` reaches zero or the ray escapes the scene.
pub fn ray_color(ray: &Ray, world: &Hittables, background: Background, depth: u32, rng: &mut impl Rng) -> Color {
    if depth == 0 {
        return Color::BLACK;
    }

    match world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) {
        Some(rec) => {
            let emitted = rec.material.emitted(rec.u, rec.v, &rec.point);
            match rec.material.scatter(ray, &rec, rng) {
                Some(scatter) => {
                    emitted + scatter.attenuation * ray_color(&scatter.scattered, world, background, depth - 1, rng)
                }
                None => emitted,
            }
        }
        None => background.radiance(ray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::objects::hittable_list::HittableList;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn depth_zero_is_always_black() {
        let world = Hittables::List(HittableList::new());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(ray_color(&r, &world, Background::GradientSky, 0, &mut rng), Color::BLACK);
    }

    #[test]
    fn empty_scene_returns_gradient_sky_center_pixel() {
        // eye=(0,0,0), looking straight down -z: normalize(dir).y == 0, so
        // a == 0.5 and the lerp lands exactly halfway.
        let world = Hittables::List(HittableList::new());
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        let color = ray_color(&r, &world, Background::GradientSky, 5, &mut rng);
        assert!((color.x - 0.75).abs() < 1e-5);
        assert!((color.y - 0.85).abs() < 1e-5);
        assert!((color.z - 1.0).abs() < 1e-5);
    }
}
