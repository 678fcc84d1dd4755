pub mod camera;
pub mod hittable;
pub mod light;
pub mod material;
pub mod mesh;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod triangle;
pub mod utils;

use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use glam::Vec3;
use log::{error, info, warn, LevelFilter};

use crate::camera::Camera;
use crate::light::PointLight;
use crate::material::Material;
use crate::plane::Plane;
use crate::renderer::Renderer;
use crate::scene::{Scene, SceneBuilder};
use crate::sphere::Sphere;

#[derive(Parser)]
#[command(name = "whitted")]
#[command(about = "A Whitted-style CPU ray tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of samples per pixel
    #[arg(short, long, default_value_t = 4)]
    samples: u32,

    /// Gamma used when encoding the output
    #[arg(long, default_value_t = 2.2)]
    gamma: f32,

    /// Maximum number of reflective bounces per ray
    #[arg(long, default_value_t = 8)]
    max_depth: u32,

    /// Fixed random seed for reproducible renders
    #[arg(long)]
    seed: Option<u64>,

    /// OBJ mesh to drop into the scene (optional)
    #[arg(long)]
    obj: Option<String>,

    /// Output file path (.ppm binary stream, or .png via the image crate)
    #[arg(short, long, default_value = "out.ppm")]
    output: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let camera = Camera::new(
        Vec3::new(0.0, 1.0, 4.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::Y,
        45.0,
        args.width,
        args.height,
    );
    let scene = build_scene(args.obj.as_deref());

    let mut renderer = Renderer::new(&scene, &camera, args.samples);
    renderer.gamma = args.gamma;
    renderer.max_depth = args.max_depth;
    renderer.seed = args.seed;

    info!(
        "rendering {}x{} at {} spp, max depth {}",
        args.width, args.height, args.samples, args.max_depth
    );
    if let Err(e) = write_output(&renderer, &args.output) {
        error!("failed to write {}: {}", args.output, e);
        std::process::exit(1);
    }
    info!("wrote {}", args.output);
}

/// Demo scene: grey ground plane, one point light, three spheres (the red
/// one a mirror) and an optional OBJ mesh above the ground.
fn build_scene(obj_path: Option<&str>) -> Scene {
    let mut sc = SceneBuilder::new();

    let mat_grey = sc.add_material(Material::default());
    sc.add(Box::new(Plane::new(Vec3::ZERO, Vec3::Y, mat_grey)));

    sc.add_light(PointLight::new(
        Vec3::new(2.0, 3.0, 2.0),
        Vec3::new(30.0, 30.0, 30.0),
    ));

    if let Some(path) = obj_path {
        match load_obj_buffers(path) {
            Some((positions, indices)) => {
                info!(
                    "loaded OBJ {}: {} vertices, {} triangles",
                    path,
                    positions.len(),
                    indices.len() / 3
                );
                let mat_mesh = sc.add_material(Material::diffuse(Vec3::new(0.8, 0.8, 0.9)));
                mesh::add_mesh(
                    &mut sc,
                    &positions,
                    &indices,
                    mat_mesh,
                    Vec3::splat(3.0),
                    Vec3::new(0.0, 0.6, 0.0),
                );
            }
            None => warn!("OBJ {} not found or failed to load, proceeding without mesh", path),
        }
    }

    let mat_red = sc.add_material(Material::new(Vec3::new(0.8, 0.2, 0.2), true));
    let mat_green = sc.add_material(Material::diffuse(Vec3::new(0.2, 0.8, 0.2)));
    let mat_blue = sc.add_material(Material::diffuse(Vec3::new(0.2, 0.2, 0.8)));
    sc.add(Box::new(Sphere::new(Vec3::new(-1.2, 2.0, 0.0), 0.5, mat_red)));
    sc.add(Box::new(Sphere::new(Vec3::new(1.2, 1.0, 0.0), 1.0, mat_green)));
    sc.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, -2.0), 0.75, mat_blue)));

    return sc.build();
}

/// Flattens every model in the OBJ into the position/index buffers the core
/// consumes. Returns `None` on any load failure; the caller decides how loud
/// to be about it.
fn load_obj_buffers(path: &str) -> Option<(Vec<Vec3>, Vec<u32>)> {
    let load_opts = tobj::LoadOptions {
        triangulate: true,
        ignore_lines: true,
        ignore_points: true,
        single_index: true,
    };
    let (models, _materials) = tobj::load_obj(path, &load_opts).ok()?;

    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    for m in &models {
        let base = positions.len() as u32;
        for p in m.mesh.positions.chunks_exact(3) {
            positions.push(Vec3::new(p[0], p[1], p[2]));
        }
        indices.extend(m.mesh.indices.iter().map(|&i| base + i));
    }
    return Some((positions, indices));
}

fn write_output(renderer: &Renderer, path: &str) -> io::Result<()> {
    if path.ends_with(".png") {
        let buf = renderer.render();
        image::save_buffer(
            path,
            &buf,
            renderer.camera.width,
            renderer.camera.height,
            image::ColorType::Rgb8,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    } else {
        let mut out = BufWriter::new(File::create(path)?);
        renderer.write_ppm(&mut out)
    }
}
