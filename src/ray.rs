use glam::Vec3;

/// Parametric ray r(t) = origin + t * direction.
///
/// The direction is not normalized by the constructor; call sites normalize
/// where the parametric distance has to mean world-space distance.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        return self.origin + self.direction * t;
    }
}
