use glam::Vec3;

use crate::hittable::{Hit, Hittable};
use crate::ray::Ray;
use crate::utils::EPSILON;

pub struct Triangle {
    pub vrt: [Vec3; 3],
    /// per-vertex normals; when absent the face normal from the
    /// vertex winding is used
    pub nrm: Option<[Vec3; 3]>,
    pub mat_id: usize,
}

impl Triangle {
    pub fn new(vrt: [Vec3; 3], mat_id: usize) -> Triangle {
        Triangle {
            vrt,
            nrm: None,
            mat_id,
        }
    }

    pub fn with_normals(vrt: [Vec3; 3], nrm: [Vec3; 3], mat_id: usize) -> Triangle {
        Triangle {
            vrt,
            nrm: Some(nrm),
            mat_id,
        }
    }
}

impl Hittable for Triangle {
    /**
     * Uses the Möller-Trumbore intersection algorithm, without backface
     * culling so both windings are visible.
     * Reference: http://www.graphics.cornell.edu/pubs/1997/MT97.html
     */
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        // calculate triangle edge vectors
        let edge_a = self.vrt[1] - self.vrt[0];
        let edge_b = self.vrt[2] - self.vrt[0];

        let p = ray.direction.cross(edge_b);
        let d = edge_a.dot(p);

        // near-zero determinant: ray parallel to the plane or degenerate triangle
        if d.abs() < EPSILON {
            return None;
        }

        let inv_d = 1.0 / d;
        let s = ray.origin - self.vrt[0];
        let u = s.dot(p) * inv_d;

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge_a);
        let v = ray.direction.dot(q) * inv_d;

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge_b.dot(q) * inv_d;
        if t < t_min || t >= t_max {
            return None;
        }

        // barycentric weights are (1-u-v, u, v) for (v0, v1, v2)
        let n = match &self.nrm {
            Some(nrm) => ((1.0 - u - v) * nrm[0] + u * nrm[1] + v * nrm[2]).normalize(),
            None => edge_a.cross(edge_b).normalize(),
        };

        return Some(Hit {
            t,
            p: ray.at(t),
            n,
            mat_id: self.mat_id,
        });
    }
}
