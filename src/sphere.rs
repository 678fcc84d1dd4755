use glam::Vec3;

use crate::hittable::{Hit, Hittable};
use crate::ray::Ray;

pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub mat_id: usize,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, mat_id: usize) -> Sphere {
        Sphere {
            center,
            radius,
            mat_id,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        // quadratic in t with the factor of two folded into b:
        // a*t^2 + 2*b*t + c2 = 0
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = oc.dot(ray.direction);
        let c2 = oc.dot(oc) - self.radius * self.radius;

        let disc = b * b - a * c2;
        if disc < 0.0 {
            return None;
        }

        // prefer the near root, fall back to the far one
        let sdisc = disc.sqrt();
        let mut t = (-b - sdisc) / a;
        if t < t_min || t >= t_max {
            t = (-b + sdisc) / a;
            if t < t_min || t >= t_max {
                return None;
            }
        }

        let p = ray.at(t);
        return Some(Hit {
            t,
            p,
            n: (p - self.center).normalize(),
            mat_id: self.mat_id,
        });
    }
}
