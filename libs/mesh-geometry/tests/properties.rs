use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use glam::DVec3;
use mesh_geometry::{
    CartesianMeshBuilder, CylinderMeshBuilder, Geometry, Range, SphereMeshBuilder, StepCount,
    TextureRepeat,
};

fn wavy_sphere(steps: StepCount) -> Geometry {
    SphereMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, PI))
        .with_steps(steps)
        .build(|theta, psi| 1.5 + 0.25 * (4.0 * theta).sin() * (3.0 * psi).cos())
        .unwrap()
}

#[test]
fn buffer_lengths_follow_step_counts() {
    for (one, two) in [(1, 1), (1, 7), (5, 2), (12, 9)] {
        let geometry = CartesianMeshBuilder::new(Range::new(-2.0, 2.0), Range::new(0.0, 3.0))
            .with_steps(StepCount::new(one, two))
            .build(|x, z| x * z)
            .unwrap();

        let nodes = (one as usize + 1) * (two as usize + 1);
        assert_eq!(geometry.positions().len(), nodes);
        assert_eq!(geometry.normals().len(), nodes);
        assert_eq!(geometry.uvs().len(), nodes);
        assert_eq!(geometry.indices().len(), 6 * one as usize * two as usize);
    }
}

#[test]
fn triangles_stay_inside_their_cell() {
    let (one, two) = (6u32, 4u32);
    let geometry = wavy_sphere(StepCount::new(one, two));
    let columns = two + 1;

    for (cell, pair) in geometry.indices().chunks(6).enumerate() {
        let i = cell as u32 / two;
        let j = cell as u32 % two;
        let corners = [
            i * columns + j,
            (i + 1) * columns + j,
            i * columns + j + 1,
            (i + 1) * columns + j + 1,
        ];
        for index in pair {
            assert!(corners.contains(index), "cell ({i}, {j}) uses {index}");
            assert!((*index as usize) < geometry.vertex_count());
        }
    }
}

#[test]
fn flat_cartesian_plane() {
    let geometry = CartesianMeshBuilder::new(Range::new(-1.0, 1.0), Range::new(-1.0, 1.0))
        .with_steps(StepCount::new(2, 2))
        .build(|_, _| 0.0)
        .unwrap();

    let mut expected = Vec::new();
    for x in [-1.0, 0.0, 1.0] {
        for z in [-1.0, 0.0, 1.0] {
            expected.push(DVec3::new(x, 0.0, z));
        }
    }
    assert_eq!(geometry.positions(), expected.as_slice());
}

#[test]
fn cylinder_ring_with_degenerate_height() {
    let geometry = CylinderMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, 0.0))
        .with_steps(StepCount::new(4, 0))
        .build(|_, _| 1.0)
        .unwrap();

    assert_eq!(geometry.vertex_count(), 5);
    assert!(geometry.indices().is_empty());
    for p in geometry.positions() {
        assert_eq!(p.y, 0.0);
        assert_relative_eq!(p.x * p.x + p.z * p.z, 1.0, epsilon = 1e-12);
    }
    // Seam: first and last columns coincide but stay separate vertices
    let first = geometry.positions()[0];
    let last = geometry.positions()[4];
    assert!(first.abs_diff_eq(last, 1e-12));
}

#[test]
fn uv_corners_scale_with_repeat() {
    let (one, two) = (7u32, 5u32);
    let geometry = CylinderMeshBuilder::new(Range::new(0.0, PI), Range::new(-1.0, 1.0))
        .with_steps(StepCount::new(one, two))
        .with_texture_repeat(TextureRepeat::new(2, 3))
        .build(|_, _| 1.0)
        .unwrap();

    let uvs = geometry.uvs();
    assert_eq!(uvs[0].to_array(), [0.0, 0.0]);
    assert_eq!(uvs[uvs.len() - 1].to_array(), [2.0, 3.0]);
}

#[test]
fn degenerate_range_still_samples_every_node() {
    let steps = StepCount::new(3, 4);
    let mut calls = Vec::new();
    let geometry = CartesianMeshBuilder::new(Range::new(2.5, 2.5), Range::new(0.0, 1.0))
        .with_steps(steps)
        .build(|x, z| {
            calls.push((x, z));
            0.0
        })
        .unwrap();

    assert_eq!(calls.len(), steps.vertex_count());
    assert!(calls.iter().all(|&(x, _)| x == 2.5));
    assert_eq!(calls.iter().filter(|&&(_, z)| z == 0.0).count(), 4);
    assert_eq!(geometry.positions()[0], geometry.positions()[5]);
}

#[test]
fn normals_are_unit_length() {
    let geometry = wavy_sphere(StepCount::new(40, 20));
    for n in geometry.normals() {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
    }

    let surface = CartesianMeshBuilder::new(Range::new(-3.0, 3.0), Range::new(-3.0, 3.0))
        .with_steps(StepCount::new(25, 25))
        .build(|x, z| (x * x + z * z).sqrt().sin())
        .unwrap();
    for n in surface.normals() {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn normals_do_not_depend_on_scale() {
    // 10 µm square, 100 nm cells
    let geometry = CartesianMeshBuilder::new(Range::new(0.0, 1e-5), Range::new(0.0, 1e-5))
        .with_steps(StepCount::new(100, 100))
        .build(|x, _| x)
        .unwrap();

    let expected = DVec3::new(1.0, 1.0, 0.0).cross(DVec3::Z).normalize();
    for n in geometry.normals() {
        assert!(n.abs_diff_eq(expected, 1e-6), "got {n}");
    }
    for tri in geometry.triangles() {
        let [a, b, c] = tri.map(|i| geometry.positions()[i as usize]);
        let face = (b - a).cross(c - a).normalize();
        assert!(face.dot(geometry.normals()[tri[0] as usize]) > 0.99);
    }
}

#[test]
fn tiny_sphere_normals_point_outward() {
    let geometry = SphereMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, PI))
        .with_steps(StepCount::new(16, 8))
        .build(|_, _| 1e-4)
        .unwrap();

    for (p, n) in geometry.positions().iter().zip(geometry.normals()) {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert!(p.dot(*n) > 0.0, "normal {n} at {p}");
    }
}

#[test]
fn sampling_failure_returns_no_geometry() {
    let mut calls = 0;
    let result = CylinderMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, 1.0))
        .with_steps(StepCount::new(10, 10))
        .try_build(|theta, _| {
            calls += 1;
            if theta > 1.0 {
                Err(format!("radius undefined at {theta}"))
            } else {
                Ok(1.0)
            }
        });

    assert!(result.is_err());
    // Stops at the first failing row: theta = 2 * TAU / 10 > 1.0
    assert_eq!(calls, 2 * 11 + 1);
}

#[test]
fn geometry_serializes_for_the_host() {
    let geometry = CartesianMeshBuilder::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0))
        .with_steps(StepCount::new(2, 1))
        .build(|x, _| x)
        .unwrap();

    let json = serde_json::to_string(&geometry).unwrap();
    let back: Geometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertex_count(), geometry.vertex_count());
    assert_eq!(back.indices(), geometry.indices());
    assert_eq!(back.material(), geometry.material());
}
