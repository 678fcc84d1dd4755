use glam::Vec3;

use crate::ray::Ray;

/// Result of a successful ray/primitive intersection.
///
/// `mat_id` is an index into the scene's material arena, not an owning
/// reference; the scene guarantees it stays valid for the whole render pass.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// parametric distance along the ray
    pub t: f32,
    /// hit point in world space
    pub p: Vec3,
    /// unit surface normal, outward for convex primitives
    pub n: Vec3,
    /// index into the scene's material list
    pub mat_id: usize,
}

/// Anything a ray can intersect.
///
/// The parametric interval is half-open: a root is accepted when
/// `t_min <= t < t_max`. The strict upper end is what makes the scene's
/// nearest-hit scan keep the earlier object on exactly equal distances.
/// Implementations treat numerical degeneracies (near-parallel rays,
/// degenerate geometry) as misses rather than producing NaN hits.
pub trait Hittable: Sync + Send {
    fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit>;
}
