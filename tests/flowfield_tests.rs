//! Integration tests for the flow-field simulation core.

use glam::{Vec2, Vec3};
use meshflow::prelude::*;

fn quad_parts(material: Material) -> Vec<MeshPart> {
    vec![MeshPart::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ])
    .with_uvs(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE])
    .with_indices(vec![0, 1, 2, 2, 1, 3])
    .with_material(material)]
}

/// Hand-built bake so tests control the exact life phases.
fn fixed_bake(lives: &[f32]) -> BakedParticles {
    let mut position = Vec::new();
    for i in 0..lives.len() {
        position.extend([i as f32, i as f32 * 2.0, -(i as f32)]);
    }
    BakedParticles {
        position,
        color: vec![1.0; lives.len() * 3],
        life: lives.to_vec(),
    }
}

#[test]
fn test_life_wrap_resets_position_bitwise() {
    let baked = fixed_bake(&[0.9995, 0.4]);
    let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();

    // First step carries particle 0 past 1.0 while it still moves.
    sim.step(0.016);
    let life_after_cross = sim.life()[0];
    assert!(life_after_cross >= 1.0);

    // The wrapping step snaps it back to its anchor, bitwise.
    sim.step(0.016);
    assert_eq!(
        sim.positions()[0].to_array(),
        sim.initial_positions()[0].to_array()
    );
    // Wrapped to the fractional remainder, not to zero.
    let wrapped = sim.life()[0];
    assert!(wrapped > 0.0 && wrapped < 1.0);
    assert_eq!(wrapped, life_after_cross - 1.0);
}

#[test]
fn test_life_monotonic_then_wrap() {
    let baked = fixed_bake(&[0.0, 0.3, 0.72, 0.96]);
    let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();

    for _ in 0..400 {
        let before = sim.life().to_vec();
        sim.step(0.016);
        for (old, &new) in before.iter().zip(sim.life()) {
            assert!(new >= 0.0, "life went negative: {new}");
            if new >= *old {
                // Advanced; never far past 1.0 before wrapping.
                assert!(new < 1.0 + 0.1 * 0.3 + 1e-6);
            } else {
                // Wrapped to the fractional remainder of the old value.
                assert_eq!(new, old - 1.0);
            }
        }
    }
}

#[test]
fn test_no_interaction_sentinel_is_inert() {
    let baked = fixed_bake(&[0.1, 0.5, 0.8]);

    let params = FlowFieldParams::default();
    assert_eq!(params.interaction_point, NO_INTERACTION);
    let mut with_sentinel = FlowFieldSim::new(&baked, params).unwrap();

    // Same run with the repulsion force switched off entirely: flow-field
    // motion alone. The sentinel must reproduce it exactly.
    let mut no_repulsion = params;
    no_repulsion.interaction_strength = 0.0;
    let mut without = FlowFieldSim::new(&baked, no_repulsion).unwrap();

    for _ in 0..60 {
        with_sentinel.step(0.016);
        without.step(0.016);
    }
    assert_eq!(with_sentinel.positions(), without.positions());
}

#[test]
fn test_step_is_deterministic() {
    let baked = bake(&quad_parts(Material::default()), 50_000).unwrap();
    let mut a = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();
    let mut b = a.clone();

    for _ in 0..5 {
        a.step(0.016);
        b.step(0.016);
    }

    // Bitwise equality across the parallel dispatch.
    for (pa, pb) in a.positions().iter().zip(b.positions()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.z.to_bits(), pb.z.to_bits());
    }
    for (la, lb) in a.life().iter().zip(b.life()) {
        assert_eq!(la.to_bits(), lb.to_bits());
    }
}

#[test]
fn test_parameter_change_applies_next_step() {
    let baked = fixed_bake(&[0.2, 0.6]);
    let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();

    sim.step(0.016);
    let moved = sim.positions().to_vec();

    // Freeze the field; subsequent steps stop moving particles.
    sim.params_mut().flow_field_strength = 0.0;
    sim.step(0.016);
    assert_eq!(sim.positions(), moved.as_slice());
}

#[test]
fn test_end_to_end_quad_scenario() {
    // Bake 4 particles onto a flat 2-triangle quad with a flat red
    // material, then run one step with zero flow strength and the
    // no-interaction sentinel.
    let red = Vec3::new(1.0, 0.0, 0.0);
    let baked = bake(&quad_parts(Material::flat(red)), 4).unwrap();

    for i in 0..4 {
        let color = Vec3::new(
            baked.color[i * 3],
            baked.color[i * 3 + 1],
            baked.color[i * 3 + 2],
        );
        assert_eq!(color, red);
        // The quad lies in the z = 0 plane.
        assert_eq!(baked.position[i * 3 + 2], 0.0);
        assert!((0.0..1.0).contains(&baked.life[i]));
    }

    let mut params = FlowFieldParams::default();
    params.flow_field_strength = 0.0;
    let mut sim = FlowFieldSim::new(&baked, params).unwrap();

    let life_before = sim.life().to_vec();
    sim.step(0.016);

    // Zero strength fully suppresses motion...
    assert_eq!(sim.positions(), sim.initial_positions());
    // ...while life still advances by dt * life_rate.
    for (before, &after) in life_before.iter().zip(sim.life()) {
        assert_eq!(after, before + 0.016 * params.life_rate);
    }
}

#[test]
fn test_repulsion_stacks_with_flow() {
    let baked = fixed_bake(&[0.5]);
    let mut params = FlowFieldParams::default();
    params.interaction_point = Vec3::new(0.2, 0.0, 0.0);
    params.interaction_radius = 5.0;

    let mut pushed = FlowFieldSim::new(&baked, params).unwrap();
    let mut flow_only = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();

    pushed.step(0.016);
    flow_only.step(0.016);

    // Same flow motion, plus a repulsion displacement on top.
    let delta = pushed.positions()[0] - flow_only.positions()[0];
    assert!(delta.length() > 0.0);
    // The extra displacement points away from the interaction point.
    let away = flow_only.positions()[0] - params.interaction_point;
    assert!(delta.dot(away) > 0.0);
}
