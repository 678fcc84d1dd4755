use glam::Vec3;

/// Geometric tolerance for near-parallel and degenerate cases.
pub const EPSILON: f32 = 1e-5;

/// Mirror `incoming` about the unit `normal`.
pub fn reflect(incoming: &Vec3, normal: &Vec3) -> Vec3 {
    return *incoming - (*normal * normal.dot(*incoming) * 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_about_the_normal() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(&incoming, &Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn grazing_direction_is_unchanged() {
        let incoming = Vec3::new(1.0, 0.0, 0.0);
        let r = reflect(&incoming, &Vec3::Y);
        assert!((r - incoming).length() < 1e-6);
    }
}
