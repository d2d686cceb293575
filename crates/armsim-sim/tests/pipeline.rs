//! Integration test: full config → builder → runner → batches pipeline.
//!
//! Loads a chain description from TOML, runs one simulated second of frames,
//! and checks that actuators settle on their commands, the tip telemetry is
//! consistent, and the render queue batches stay complete.

use approx::assert_relative_eq;
use nalgebra::Vector3;

use armsim_chain::component::{Component, Hinge};
use armsim_core::config::SimConfig;
use armsim_render::MeshId;
use armsim_sim::{ChainBuilder, FrameRunner};

const SCENE_TOML: &str = r#"
    frame_dt = 0.0125

    [[chain]]
    hinge = { target_angle = 1.5707964 }

    [[chain]]
    piston = { max_length = 2.0, target_length = 1.1 }

    [[chain]]
    link = { length = 0.5 }
"#;

#[test]
fn configured_chain_settles_and_batches() {
    let config: SimConfig = toml::from_str(SCENE_TOML).unwrap();
    config.validate().unwrap();

    let sim = ChainBuilder::from_config(&config).build();
    let mut runner = FrameRunner::new(sim);

    let dt = config.frame_dt as f32;
    let frames = (2.5 / config.frame_dt).round() as u64;
    let mut data = runner.step(dt);
    for _ in 1..frames {
        data = runner.step(dt);
    }

    // 2.5 simulated seconds is enough for both actuators to settle:
    // the hinge needs 1 s at π/2 rad/s, the piston 1 s at unit speed.
    let Component::Hinge(h) = &runner.simulation().components()[0] else {
        panic!("expected hinge at 0");
    };
    assert_relative_eq!(h.current_angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-4);

    // Settled chain: no tip motion left.
    assert_relative_eq!(data.tip_vel, Vector3::zeros(), epsilon = 1e-5);

    // Hinge at 90°: piston (1.1) + link (0.5) extend along world -X.
    assert_relative_eq!(data.tip_pos, Vector3::new(-1.6, 0.0, 0.0), epsilon = 1e-3);

    // Stats cover every frame.
    assert_eq!(runner.stats().frames, frames);
    assert!(runner.stats().peak_tip_speed > 0.0);

    // Batches: piston + link share the cube mesh, hinge gets the sphere.
    let batches = runner.batches();
    assert_eq!(batches.len(), 2);
    let total: usize = batches.iter().map(|(_, instances)| instances.len()).sum();
    assert_eq!(total, 3);
    assert!(batches.iter().any(|(mesh, instances)| {
        *mesh == MeshId::Cube && instances.len() == 2
    }));
    assert!(batches.iter().any(|(mesh, instances)| {
        *mesh == MeshId::Sphere && instances.len() == 1
    }));
}

#[test]
fn mid_run_mutation_redirects_the_chain() {
    let sim = ChainBuilder::new().with_hinge().with_link(1.0).build();
    let mut runner = FrameRunner::new(sim);

    // Run quiescent, then command the hinge between frames.
    runner.step(0.016);
    assert_relative_eq!(
        runner.step(0.016).tip_pos,
        Vector3::new(0.0, 1.0, 0.0),
        epsilon = 1e-6
    );

    runner
        .simulation_mut()
        .set_hinge_target_angle(0, -std::f32::consts::FRAC_PI_2)
        .unwrap();

    let data = runner.step(2.0);
    // Settled at -90°: the link now extends along world +X.
    assert_relative_eq!(data.tip_pos, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-5);

    // Removing the hinge renumbers the link to index 0.
    runner.simulation_mut().remove_component(0).unwrap();
    let data = runner.step(0.016);
    assert_eq!(data.instances.len(), 1);
    assert_relative_eq!(data.tip_pos, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
}

#[test]
fn hinge_speed_constant_matches_advertised_rate() {
    // One frame at dt = 0.1 must advance the hinge by exactly
    // ROTATION_SPEED * 0.1 while far from its target.
    let sim = ChainBuilder::new().with_hinge().build();
    let mut runner = FrameRunner::new(sim);
    runner
        .simulation_mut()
        .set_hinge_target_angle(0, 10.0)
        .unwrap();

    runner.step(0.1);
    let Component::Hinge(h) = &runner.simulation().components()[0] else {
        panic!();
    };
    assert_relative_eq!(h.current_angle, Hinge::ROTATION_SPEED * 0.1, epsilon = 1e-6);
}
