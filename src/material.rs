use glam::Vec3;

/// Surface description referenced by index from hit records.
///
/// `reflective` is a binary switch: a reflective surface is a pure mirror and
/// receives no direct lighting at all, everything else is Lambertian.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub albedo: Vec3,
    pub reflective: bool,
}

impl Material {
    pub fn new(albedo: Vec3, reflective: bool) -> Material {
        Material { albedo, reflective }
    }

    pub fn diffuse(albedo: Vec3) -> Material {
        Material {
            albedo,
            reflective: false,
        }
    }
}

impl Default for Material {
    fn default() -> Material {
        Material {
            albedo: Vec3::new(0.8, 0.8, 0.8),
            reflective: false,
        }
    }
}
