use std::io::{self, Write};

use glam::Vec3;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::Camera;
use crate::hittable::Hit;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::utils::reflect;

/// Lower bound for every trace query; keeps secondary rays from
/// re-intersecting the surface they start on.
const T_MIN: f32 = 1e-6;
/// Effectively-infinite far plane.
const T_FAR: f32 = 1e9;
/// Shadow rays start this far along the normal to avoid acne.
const SHADOW_BIAS: f32 = 1e-4;
/// Occluders this close to the light itself do not count.
const SHADOW_MARGIN: f32 = 1e-5;

const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const SKY_BLUE: Vec3 = Vec3::new(0.6, 0.8, 1.0);

/// Background gradient for rays that escape the scene: white at the horizon
/// blending to sky blue at the zenith.
pub fn background(ray: &Ray) -> Vec3 {
    let unit = ray.direction.normalize();
    let t = 0.5 * (unit.y + 1.0);
    return (1.0 - t) * WHITE + t * SKY_BLUE;
}

/// Whitted-style renderer over a frozen scene.
///
/// `gamma`, `max_depth` and `seed` have sensible defaults after `new` and can
/// be overridden before rendering.
pub struct Renderer<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    /// stochastic samples averaged per pixel
    pub spp: u32,
    pub gamma: f32,
    /// bounce limit; exceeding it terminates the ray as black
    pub max_depth: u32,
    /// fixed seed for reproducible renders, entropy otherwise
    pub seed: Option<u64>,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, camera: &'a Camera, spp: u32) -> Renderer<'a> {
        assert!(spp > 0, "samples per pixel must be positive");
        Renderer {
            scene,
            camera,
            spp,
            gamma: 2.2,
            max_depth: 8,
            seed: None,
        }
    }

    /// Renders the full image into a row-major RGB byte buffer, top row
    /// first (the row index runs from H-1 down to 0, and sy = +1 is up).
    pub fn render(&self) -> Vec<u8> {
        let (w, h) = (self.camera.width, self.camera.height);
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut buf = Vec::with_capacity((w * h * 3) as usize);
        for j in (0..h).rev() {
            debug!("row {}/{}", h - 1 - j, h);
            for i in 0..w {
                let mut col = Vec3::ZERO;
                for _ in 0..self.spp {
                    // jitter within the pixel footprint, then map to [-1, 1]
                    let sx = ((i as f32 + rng.gen::<f32>()) / w as f32) * 2.0 - 1.0;
                    let sy = ((j as f32 + rng.gen::<f32>()) / h as f32) * 2.0 - 1.0;
                    col += self.trace(&self.camera.primary(sx, sy), 0);
                }
                col /= self.spp as f32;
                buf.extend_from_slice(&self.tone_map(col));
            }
        }
        return buf;
    }

    /// Renders and writes a binary PPM (`P6`) stream, flushed before
    /// returning on the success path.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.camera.width, self.camera.height)?;
        out.write_all(&self.render())?;
        out.flush()
    }

    /// Radiance arriving along `ray`. `depth` counts reflective bounces;
    /// past the limit the ray is cut off as black so mutually reflective
    /// surfaces terminate deterministically.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Vec3 {
        if depth > self.max_depth {
            return Vec3::ZERO;
        }
        match self.scene.intersect(ray, T_MIN, T_FAR) {
            Some(hit) => self.shade(&hit, ray, depth),
            None => background(ray),
        }
    }

    fn shade(&self, hit: &Hit, ray: &Ray, depth: u32) -> Vec3 {
        let material = self.scene.material(hit.mat_id);

        // pure mirror: reflective surfaces skip direct lighting entirely
        if material.reflective {
            let incoming = hit.p - ray.origin;
            let reflected = Ray::new(hit.p, reflect(&incoming, &hit.n));
            return self.trace(&reflected, depth + 1);
        }

        let mut col = Vec3::ZERO;
        for light in self.scene.lights() {
            if self.in_shadow(hit.p, hit.n, light.position) {
                continue;
            }
            let wi = (light.position - hit.p).normalize();
            let n_dot_l = hit.n.dot(wi).max(0.0);
            col += material.albedo * light.arriving_at(hit.p) * n_dot_l;
        }
        return col;
    }

    fn in_shadow(&self, p: Vec3, n: Vec3, light_pos: Vec3) -> bool {
        let to_light = light_pos - p;
        let dist = to_light.length();
        let shadow_ray = Ray::new(p + n * SHADOW_BIAS, to_light / dist);
        return self
            .scene
            .intersect(&shadow_ray, 0.0, dist - SHADOW_MARGIN)
            .is_some();
    }

    /// Reinhard compression followed by gamma encoding, per channel.
    fn tone_map(&self, col: Vec3) -> [u8; 3] {
        let compressed = col / (Vec3::ONE + col);
        let mut out = [0u8; 3];
        for (byte, x) in out.iter_mut().zip(compressed.to_array()) {
            let encoded = x.max(0.0).powf(1.0 / self.gamma);
            *byte = (encoded.clamp(0.0, 1.0) * 255.99) as u8;
        }
        return out;
    }
}
