//! # Geometry
//!
//! The payload handed to the host renderer: four vertex-aligned buffers plus a
//! default material. All values stay f64 here; [`Geometry::to_buffers`]
//! converts to f32 flat arrays at the GPU boundary.

use ::config::constants::DEFAULT_COLOR;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::assembler::MeshBuffers;
use crate::error::{GeometryError, GeometryResult};

// =============================================================================
// MATERIAL
// =============================================================================

/// Lighting model requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shading {
    /// Blinn-Phong specular highlights.
    #[default]
    Blinn,
    /// Phong specular highlights.
    Phong,
    /// Diffuse only.
    Lambert,
    /// Unlit.
    Constant,
}

/// Minimal material descriptor attached to every generated geometry.
///
/// # Examples
/// ```
/// use mesh_geometry::{Material, Shading};
/// let material = Material::default();
/// assert!(!material.double_sided);
/// assert_eq!(material.shading, Shading::Blinn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse RGBA in range [0.0, 1.0]
    pub diffuse: [f32; 4],
    /// Render back faces too
    pub double_sided: bool,
    /// Lighting model
    pub shading: Shading,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: DEFAULT_COLOR,
            double_sided: false,
            shading: Shading::default(),
        }
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// One vertex of a [`Geometry`], gathered from the parallel buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position
    pub position: DVec3,
    /// Unit normal
    pub normal: DVec3,
    /// Texture coordinate
    pub uv: DVec2,
}

/// Triangle mesh with normals, texture coordinates and a material.
///
/// The caller owns it outright; builders keep no reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    indices: Vec<u32>,
    material: Material,
}

impl Geometry {
    /// Packages assembled buffers with the default material.
    ///
    /// Fails only if the buffers disagree in length or reference a vertex
    /// that does not exist.
    pub fn package(buffers: MeshBuffers) -> GeometryResult<Self> {
        Self::with_material(buffers, Material::default())
    }

    /// Packages assembled buffers with an explicit material.
    pub fn with_material(buffers: MeshBuffers, material: Material) -> GeometryResult<Self> {
        let MeshBuffers {
            positions,
            normals,
            uvs,
            indices,
        } = buffers;

        let geometry = Self {
            positions,
            normals,
            uvs,
            indices,
            material,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks buffer lengths and index bounds.
    pub fn validate(&self) -> GeometryResult<()> {
        let count = self.positions.len();
        if self.normals.len() != count {
            return Err(GeometryError::inconsistent(format!(
                "{} normals for {} positions",
                self.normals.len(),
                count
            )));
        }
        if self.uvs.len() != count {
            return Err(GeometryError::inconsistent(format!(
                "{} uvs for {} positions",
                self.uvs.len(),
                count
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::inconsistent(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(GeometryError::inconsistent(format!(
                "index {index} out of range for {count} vertices"
            )));
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions, row-major over the parameter grid.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Unit normals, one per position.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Texture coordinates, one per position.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Flat triangle list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Attached material.
    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Mutable access to the material, e.g. to make it double sided.
    #[inline]
    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    /// Gathers vertex `index` from the three vertex buffers.
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        Some(Vertex {
            position: *self.positions.get(index)?,
            normal: *self.normals.get(index)?,
            uv: *self.uvs.get(index)?,
        })
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Converts to f32 flat arrays for GPU upload.
    pub fn to_buffers(&self) -> GpuBuffers {
        GpuBuffers {
            positions: self
                .positions
                .iter()
                .flat_map(|p| p.as_vec3().to_array())
                .collect(),
            normals: self
                .normals
                .iter()
                .flat_map(|n| n.as_vec3().to_array())
                .collect(),
            uvs: self
                .uvs
                .iter()
                .flat_map(|uv| uv.as_vec2().to_array())
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// Consumes the geometry, returning buffers and material.
    pub fn into_parts(self) -> (MeshBuffers, Material) {
        (
            MeshBuffers {
                positions: self.positions,
                normals: self.normals,
                uvs: self.uvs,
                indices: self.indices,
            },
            self.material,
        )
    }
}

// =============================================================================
// GPU BUFFERS
// =============================================================================

/// Flat f32 buffers suitable for WebGL/WebGPU vertex attributes.
///
/// ## Memory Layout
///
/// - `positions`: [x0, y0, z0, x1, y1, z1, ...]
/// - `normals`: [nx0, ny0, nz0, ...]
/// - `uvs`: [u0, v0, u1, v1, ...]
/// - `indices`: [i0, i1, i2, ...]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuBuffers {
    /// 3 floats per vertex
    pub positions: Vec<f32>,
    /// 3 floats per vertex
    pub normals: Vec<f32>,
    /// 2 floats per vertex
    pub uvs: Vec<f32>,
    /// 3 indices per triangle
    pub indices: Vec<u32>,
}

impl GpuBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests;
