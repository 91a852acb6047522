use std::sync::Arc;

use rand::Rng;

use crate::{aabb::Aabb, aabb::Axis, interval::Interval, objects::HitRecord, objects::Hittables, ray::Ray};

/// A node in the bounding-volume hierarchy. Leaves hold one or two
/// primitives directly rather than delegating to a further list, so
/// traversal of small scenes never recurses through a degenerate list node.
#[derive(Clone)]
pub enum BvhNode {
    Leaf(Box<Hittables>),
    TwoLeaf(Box<Hittables>, Box<Hittables>, Aabb),
    Branch { left: Arc<BvhNode>, right: Arc<BvhNode>, bbox: Aabb },
}

impl BvhNode {
    /// Build a BVH over `objects`, splitting on a uniformly random axis at
    /// each level and partitioning at the median of bounding-box minimums.
    pub fn build(mut objects: Vec<Hittables>, time0: f32, time1: f32, rng: &mut impl Rng) -> BvhNode {
        let axis = pick_random_axis(rng);
        match objects.len() {
            0 => panic!("cannot build a BVH from zero objects"),
            1 => BvhNode::Leaf(Box::new(objects.pop().unwrap())),
            2 => {
                let b = objects.pop().unwrap();
                let a = objects.pop().unwrap();
                let box_a = a.bounding_box(time0, time1);
                let box_b = b.bounding_box(time0, time1);
                let bbox = Aabb::union(&box_a, &box_b);
                if box_a.min_on(axis) <= box_b.min_on(axis) {
                    BvhNode::TwoLeaf(Box::new(a), Box::new(b), bbox)
                } else {
                    BvhNode::TwoLeaf(Box::new(b), Box::new(a), bbox)
                }
            }
            _ => {
                objects.sort_by(|a, b| {
                    a.bounding_box(time0, time1)
                        .min_on(axis)
                        .partial_cmp(&b.bounding_box(time0, time1).min_on(axis))
                        .unwrap()
                });

                let mid = objects.len() / 2;
                let right_half = objects.split_off(mid);
                let left = BvhNode::build(objects, time0, time1, rng);
                let right = BvhNode::build(right_half, time0, time1, rng);
                let bbox = Aabb::union(&left.bounding_box(), &right.bounding_box());
                BvhNode::Branch { left: Arc::new(left), right: Arc::new(right), bbox }
            }
        }
    }

    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            BvhNode::Leaf(obj) => obj.hit(r, ray_t),
            BvhNode::TwoLeaf(a, b, bbox) => {
                if !bbox.hit(r, ray_t) {
                    return None;
                }
                let hit_a = a.hit(r, ray_t);
                let closest = hit_a.as_ref().map(|rec| rec.t).unwrap_or(ray_t.max);
                let hit_b = b.hit(r, Interval::new(ray_t.min, closest));
                hit_b.or(hit_a)
            }
            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(r, ray_t) {
                    return None;
                }
                let hit_left = left.hit(r, ray_t);
                let right_max = hit_left.as_ref().map(|rec| rec.t).unwrap_or(ray_t.max);
                let hit_right = right.hit(r, Interval::new(ray_t.min, right_max));
                hit_right.or(hit_left)
            }
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        match self {
            BvhNode::Leaf(obj) => obj.bounding_box(f32::NEG_INFINITY, f32::INFINITY),
            BvhNode::TwoLeaf(_, _, bbox) => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}

fn pick_random_axis(rng: &mut impl Rng) -> Axis {
    match rng.random_range(0..3) {
        0 => Axis::X,
        1 => Axis::Y,
        _ => Axis::Z,
    }
}
