use glam::Vec3;

use crate::hittable::{Hit, Hittable};
use crate::ray::Ray;
use crate::utils::EPSILON;

/// Infinite plane through `point` with unit normal `normal`.
///
/// The normal is reported as authored, never flipped toward the ray.
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub mat_id: usize,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, mat_id: usize) -> Plane {
        Plane {
            point,
            normal,
            mat_id,
        }
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        // near-parallel rays are a miss, not a division blow-up
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < t_min || t >= t_max {
            return None;
        }

        return Some(Hit {
            t,
            p: ray.at(t),
            n: self.normal,
            mat_id: self.mat_id,
        });
    }
}
