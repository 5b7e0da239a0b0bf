//! Geometry packaging tests.

use super::*;

fn quad() -> MeshBuffers {
    MeshBuffers {
        positions: vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
        ],
        normals: vec![DVec3::NEG_Y; 4],
        uvs: vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ],
        indices: vec![0, 2, 3, 0, 3, 1],
    }
}

#[test]
fn test_package_attaches_default_material() {
    let geometry = Geometry::package(quad()).unwrap();
    assert_eq!(geometry.vertex_count(), 4);
    assert_eq!(geometry.triangle_count(), 2);
    assert_eq!(*geometry.material(), Material::default());
    assert_eq!(geometry.material().diffuse, DEFAULT_COLOR);
}

#[test]
fn test_package_rejects_short_normals() {
    let mut buffers = quad();
    buffers.normals.pop();
    let err = Geometry::package(buffers).unwrap_err();
    assert!(matches!(err, GeometryError::InconsistentBuffers { .. }));
    assert!(err.to_string().contains("3 normals for 4 positions"));
}

#[test]
fn test_package_rejects_out_of_range_index() {
    let mut buffers = quad();
    buffers.indices[4] = 9;
    let err = Geometry::package(buffers).unwrap_err();
    assert!(err.to_string().contains("index 9"));
}

#[test]
fn test_package_rejects_partial_triangle() {
    let mut buffers = quad();
    buffers.indices.push(0);
    assert!(Geometry::package(buffers).is_err());
}

#[test]
fn test_empty_geometry_is_valid() {
    let geometry = Geometry::package(MeshBuffers::default()).unwrap();
    assert!(geometry.is_empty());
    assert_eq!(geometry.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
}

#[test]
fn test_vertex_gathers_buffers() {
    let geometry = Geometry::package(quad()).unwrap();
    let v = geometry.vertex(2).unwrap();
    assert_eq!(v.position, DVec3::new(1.0, 2.0, 0.0));
    assert_eq!(v.normal, DVec3::NEG_Y);
    assert_eq!(v.uv, DVec2::new(1.0, 0.0));
    assert!(geometry.vertex(4).is_none());
}

#[test]
fn test_triangles_iterator() {
    let geometry = Geometry::package(quad()).unwrap();
    let triangles: Vec<_> = geometry.triangles().collect();
    assert_eq!(triangles, vec![[0, 2, 3], [0, 3, 1]]);
}

#[test]
fn test_bounding_box() {
    let geometry = Geometry::package(quad()).unwrap();
    let (min, max) = geometry.bounding_box();
    assert_eq!(min, DVec3::ZERO);
    assert_eq!(max, DVec3::new(1.0, 2.0, 1.0));
}

#[test]
fn test_gpu_buffers_layout() {
    let geometry = Geometry::package(quad()).unwrap();
    let buffers = geometry.to_buffers();
    assert_eq!(buffers.vertex_count(), 4);
    assert_eq!(buffers.triangle_count(), 2);
    assert_eq!(buffers.positions.len(), 12);
    assert_eq!(buffers.normals.len(), 12);
    assert_eq!(buffers.uvs.len(), 8);
    assert_eq!(&buffers.positions[6..9], &[1.0, 2.0, 0.0]);
    assert_eq!(&buffers.uvs[2..4], &[0.0, 1.0]);
}

#[test]
fn test_material_mut_and_into_parts() {
    let mut geometry = Geometry::package(quad()).unwrap();
    geometry.material_mut().double_sided = true;
    let (buffers, material) = geometry.into_parts();
    assert!(material.double_sided);
    assert_eq!(buffers, quad());
}

#[test]
fn test_geometry_json_round_trip() {
    let geometry = Geometry::package(quad()).unwrap();
    let json = serde_json::to_string(&geometry).unwrap();
    let back: Geometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, geometry);
}
