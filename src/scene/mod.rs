pub mod builders;

use crate::{camera::Camera, estimator::Background, objects::Hittables};

/// The product of a scene builder: a fully assembled root hittable (always
/// a BVH node once more than one primitive is present), the camera that
/// views it, and the background radiance to use on a miss.
pub struct Scene {
    pub world: Hittables,
    pub camera: Camera,
    pub background: Background,
}
