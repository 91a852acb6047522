use crate::math::{Point3, Vec3};

/// A parametric ray `P(t) = origin + t*direction`, carrying a shutter time
/// used by moving primitives and the camera's motion blur.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
    time: f32,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3, time: f32) -> Ray {
        debug_assert!(direction.length_squared() > 0.0, "ray direction must be non-zero");
        Ray { origin, direction, time }
    }

    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_follows_parametric_line() {
        let r = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.0);
        assert_eq!(r.at(2.0), Vec3::new(2.0, 0.0, 0.0));
    }
}
