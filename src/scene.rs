use crate::hittable::{Hit, Hittable};
use crate::light::PointLight;
use crate::material::Material;
use crate::ray::Ray;

/// Mutable construction phase of a scene.
///
/// All geometry, materials and lights are added here; `build` freezes the
/// result into an immutable [`Scene`]. Material indices handed out by
/// `add_material` are stable and never reused.
#[derive(Default)]
pub struct SceneBuilder {
    objects: Vec<Box<dyn Hittable>>,
    materials: Vec<Material>,
    lights: Vec<PointLight>,
}

impl SceneBuilder {
    pub fn new() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// Appends a material and returns its index for use as a `mat_id`.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        return self.materials.len() - 1;
    }

    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn build(self) -> Scene {
        Scene {
            objects: self.objects,
            materials: self.materials,
            lights: self.lights,
        }
    }
}

/// Render-ready scene: read-only once built, so rays in flight never observe
/// structural mutation. Every `mat_id` carried by the owned geometry must be
/// a valid index into `materials`.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    materials: Vec<Material>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Nearest hit across all objects in `[t_min, t_max)`, or `None`.
    ///
    /// Linear scan with a shrinking upper bound: each object is tested
    /// against `[t_min, closest)`, so only strictly nearer hits can replace
    /// the current best and ties go to the earlier-inserted object.
    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let mut closest = t_max;
        let mut best: Option<Hit> = None;
        for object in &self.objects {
            if let Some(hit) = object.intersect(ray, t_min, closest) {
                closest = hit.t;
                best = Some(hit);
            }
        }
        return best;
    }

    pub fn material(&self, mat_id: usize) -> &Material {
        &self.materials[mat_id]
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
}
