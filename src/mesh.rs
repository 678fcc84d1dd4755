use glam::Vec3;
use log::warn;

use crate::scene::SceneBuilder;
use crate::triangle::Triangle;

/// Instantiates one [`Triangle`] per face of an indexed triangle mesh,
/// applying `scale` then `translate` to every vertex position. The transform
/// runs once here at scene-build time, not per ray.
///
/// Empty or malformed buffers are rejected with a warning and `false` so a
/// missing mesh never takes the whole render down.
pub fn add_mesh(
    scene: &mut SceneBuilder,
    positions: &[Vec3],
    indices: &[u32],
    mat_id: usize,
    scale: Vec3,
    translate: Vec3,
) -> bool {
    if positions.is_empty() || indices.is_empty() {
        warn!("skipping mesh: empty vertex or index buffer");
        return false;
    }
    if indices.len() % 3 != 0 {
        warn!(
            "skipping mesh: index count {} is not a multiple of 3",
            indices.len()
        );
        return false;
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        warn!(
            "skipping mesh: index {} out of range for {} vertices",
            bad,
            positions.len()
        );
        return false;
    }

    for face in indices.chunks_exact(3) {
        let vrt = [
            positions[face[0] as usize] * scale + translate,
            positions[face[1] as usize] * scale + translate,
            positions[face[2] as usize] * scale + translate,
        ];
        scene.add(Box::new(Triangle::new(vrt, mat_id)));
    }
    return true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::ray::Ray;

    fn quad() -> (Vec<Vec3>, Vec<u32>) {
        let positions = vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        (positions, indices)
    }

    #[test]
    fn empty_buffers_are_skipped() {
        let mut sc = SceneBuilder::new();
        assert!(!add_mesh(&mut sc, &[], &[], 0, Vec3::ONE, Vec3::ZERO));
        assert_eq!(sc.object_count(), 0);
    }

    #[test]
    fn non_triangular_index_count_is_skipped() {
        let (positions, _) = quad();
        let mut sc = SceneBuilder::new();
        assert!(!add_mesh(&mut sc, &positions, &[0, 1], 0, Vec3::ONE, Vec3::ZERO));
        assert_eq!(sc.object_count(), 0);
    }

    #[test]
    fn out_of_range_index_is_skipped() {
        let (positions, _) = quad();
        let mut sc = SceneBuilder::new();
        assert!(!add_mesh(&mut sc, &positions, &[0, 1, 9], 0, Vec3::ONE, Vec3::ZERO));
        assert_eq!(sc.object_count(), 0);
    }

    #[test]
    fn adds_one_triangle_per_face() {
        let (positions, indices) = quad();
        let mut sc = SceneBuilder::new();
        let m = sc.add_material(Material::default());
        assert!(add_mesh(&mut sc, &positions, &indices, m, Vec3::ONE, Vec3::ZERO));
        assert_eq!(sc.object_count(), 2);
    }

    #[test]
    fn scale_and_translate_are_applied_to_vertices() {
        let (positions, indices) = quad();
        let mut sc = SceneBuilder::new();
        let m = sc.add_material(Material::default());
        add_mesh(
            &mut sc,
            &positions,
            &indices,
            m,
            Vec3::splat(2.0),
            Vec3::new(0.0, 0.0, -5.0),
        );
        let scene = sc.build();

        // the quad now spans [-2,2]^2 at z=-5
        let r = Ray::new(Vec3::new(1.5, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&r, 1e-6, 1e9).expect("should hit scaled quad");
        assert!((hit.t - 5.0).abs() < 1e-4);
    }
}
