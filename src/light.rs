use std::f32::consts::PI;

use glam::Vec3;

/// Point light with RGB radiant intensity (not normalized to [0,1]).
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Vec3) -> PointLight {
        PointLight {
            position,
            intensity,
        }
    }

    /// Radiance arriving at `p`, with inverse-square falloff over the
    /// full sphere.
    pub fn arriving_at(&self, p: Vec3) -> Vec3 {
        let to_light = self.position - p;
        return self.intensity / (4.0 * PI * to_light.dot(to_light));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_is_inverse_square() {
        let light = PointLight::new(Vec3::ZERO, Vec3::splat(30.0));
        let near = light.arriving_at(Vec3::new(1.0, 0.0, 0.0));
        let far = light.arriving_at(Vec3::new(2.0, 0.0, 0.0));
        assert!((near.x / far.x - 4.0).abs() < 1e-4);
        assert!((near.x - 30.0 / (4.0 * PI)).abs() < 1e-4);
    }

    #[test]
    fn zero_intensity_arrives_as_zero() {
        let light = PointLight::new(Vec3::new(2.0, 3.0, 2.0), Vec3::ZERO);
        assert_eq!(light.arriving_at(Vec3::ZERO), Vec3::ZERO);
    }
}
