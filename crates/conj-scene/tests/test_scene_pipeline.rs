//! End-to-end scene flow: parameter edit -> profile solve -> tessellation
//! -> pivot navigation -> GPU buffer packing.

use std::f64::consts::{PI, TAU};

use conj_geometry::{ProfilePolicy, Surface, SurfaceParams};
use conj_scene::{prepare_mesh, NavStep, SceneState};

#[test]
fn test_reference_scenario() {
    // R1=3, R2=2, fi=PI/6, 4x4 grid
    let mut scene = SceneState::new(
        SurfaceParams::new(3.0, 2.0, PI / 6.0, 4, 4),
        ProfilePolicy::default(),
    );

    let constants = scene.constants();
    assert_eq!(constants.amplitude, -1.0);
    assert!(constants.period.is_finite());

    let mesh = scene.regenerate().unwrap();
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.triangle_count(), 32);
    assert_eq!(mesh.line_count(), 32);

    // First grid vertex sits at (R1, 0, -b/2)
    let b = constants.height_bound;
    let first = mesh.positions[0];
    assert!((first.x - 3.0).abs() < 1e-12);
    assert!(first.y.abs() < 1e-12);
    assert!((first.z + b / 2.0).abs() < 1e-12);
}

#[test]
fn test_parameter_edit_then_regenerate() {
    let mut scene = SceneState::new(SurfaceParams::default(), ProfilePolicy::default());
    scene.regenerate().unwrap();
    let old_count = scene.mesh().unwrap().vertex_count();

    let mut params = scene.params;
    params.u_steps = 12;
    params.v_steps = 8;
    scene.set_params(params);
    scene.regenerate().unwrap();

    let mesh = scene.mesh().unwrap();
    assert_ne!(mesh.vertex_count(), old_count);
    assert_eq!(mesh.vertex_count(), 13 * 9);
}

#[test]
fn test_pivot_navigation_round_trip() {
    let mut scene = SceneState::new(SurfaceParams::default(), ProfilePolicy::default());
    scene.regenerate().unwrap();

    let start = scene.pivot.uv.unwrap();
    // 50 steps right walk the full angular span and wrap back
    for _ in 0..50 {
        scene.step_pivot(NavStep::Right);
    }
    let end = scene.pivot.uv.unwrap();
    assert!(
        (end.x - start.x).abs() < 1e-9 || (end.x - start.x).abs() > TAU - 1e-9,
        "50 angular steps should return to the start, got {} -> {}",
        start.x,
        end.x
    );
    assert_eq!(end.y, start.y);
}

#[test]
fn test_pivot_tracks_surface_after_regenerate() {
    let mut scene = SceneState::new(SurfaceParams::default(), ProfilePolicy::default());
    scene.regenerate().unwrap();
    let uv = scene.pivot.uv.unwrap();

    let surface = scene.surface();
    let expected = surface.point_at(uv.x, uv.y);
    assert!((scene.pivot_position() - expected).length() < 1e-12);
}

#[test]
fn test_gpu_packing_matches_mesh() {
    let mut scene = SceneState::new(
        SurfaceParams::new(3.0, 2.0, PI / 6.0, 6, 5),
        ProfilePolicy::default(),
    );
    let mesh = scene.regenerate().unwrap();
    let render = prepare_mesh(mesh);

    assert_eq!(render.vertices.len(), mesh.vertex_count());
    assert_eq!(render.triangle_indices, mesh.triangles);
    assert_eq!(render.line_indices, mesh.lines);
    assert_eq!(
        render.vertex_buffer_bytes.len(),
        mesh.vertex_count() * std::mem::size_of::<conj_scene::GpuVertex>()
    );
}
