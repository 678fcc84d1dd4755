use glam::Vec3;

use crate::ray::Ray;

/// Pinhole camera with a fixed orthonormal basis derived once at
/// construction; re-aiming means constructing a new camera.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub width: u32,
    pub height: u32,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    half_w: f32,
    half_h: f32,
}

impl Camera {
    /// Builds the look-at basis: `w` faces backward, `u` right, `v` up.
    ///
    /// Precondition: `up` must not be parallel to `eye - look`; a degenerate
    /// basis is not checked for here.
    pub fn new(eye: Vec3, look: Vec3, up: Vec3, vfov_deg: f32, width: u32, height: u32) -> Camera {
        let aspect = width as f32 / height as f32;
        let half_h = (vfov_deg.to_radians() / 2.0).tan();
        let half_w = aspect * half_h;

        let w = (eye - look).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        Camera {
            eye,
            width,
            height,
            u,
            v,
            w,
            half_w,
            half_h,
        }
    }

    /// Primary ray for normalized image-plane coordinates `sx, sy` in
    /// [-1, 1]; the camera looks down `-w`.
    pub fn primary(&self, sx: f32, sy: f32) -> Ray {
        let dir = (-self.w + sx * self.half_w * self.u + sy * self.half_h * self.v).normalize();
        return Ray::new(self.eye, dir);
    }
}
