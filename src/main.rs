//! Headless demo: bake a textured quad and run the flow field for a while.

use glam::{Vec2, Vec3};
use meshflow::prelude::*;

fn main() {
    // 2x2 checkerboard texture over a unit quad in the XZ plane.
    let texture = TexturePixels::from_rgba(
        vec![
            230, 60, 40, 255, //
            250, 200, 60, 255, //
            250, 200, 60, 255, //
            230, 60, 40, 255,
        ],
        2,
        2,
    );
    let quad = MeshPart::new(vec![
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ])
    .with_uvs(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE])
    .with_indices(vec![0, 1, 2, 2, 1, 3])
    .with_material(Material::textured(texture));

    let particle_count = 100_000;
    let baked = bake(&[quad], particle_count).expect("bake failed");
    let mut sim =
        FlowFieldSim::new(&baked, FlowFieldParams::default()).expect("simulation init failed");

    println!("baked {} particles, stepping...", sim.particle_count());

    let mut timer = FrameTimer::new();
    let mut scales = Vec::with_capacity(particle_count);
    for frame in 0..600u32 {
        sim.step(timer.tick().max(1.0 / 60.0));

        // A real host would hand these to its rasterizer.
        lifecycle::fill_scales(sim.life(), sim.params().particle_size, &mut scales);

        if frame % 120 == 0 {
            let mean: Vec3 =
                sim.positions().iter().sum::<Vec3>() / sim.particle_count() as f32;
            println!(
                "frame {:3}  t={:5.2}s  mean position ({:+.3}, {:+.3}, {:+.3})  fps {:.0}",
                frame,
                sim.elapsed(),
                mean.x,
                mean.y,
                mean.z,
                timer.fps(),
            );
        }
    }

    println!("done after {} frames", timer.frame());
}
