use conj_math::aabb::Aabb3;
use conj_math::{Point2, Point3, Vector3};

/// Largest vertex count addressable by the 16-bit index buffers.
pub const MAX_GRID_VERTICES: usize = 1 << 16;

/// GPU-ready surface mesh with index-aligned vertex attribute arrays and
/// separate triangle and wireframe-line index streams.
///
/// Indices are 16-bit; [`MAX_GRID_VERTICES`] is a hard precondition of the
/// tessellator. Each regeneration replaces a mesh wholesale, there is no
/// incremental update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub tangents: Vec<Vector3>,
    pub uvs: Vec<Point2>,
    /// Triangle index triples
    pub triangles: Vec<u16>,
    /// Line-segment index pairs for wireframe rendering
    pub lines: Vec<u16>,
}

impl SurfaceMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of wireframe line segments in the mesh.
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conj_math::DVec3;

    fn single_quad() -> SurfaceMesh {
        SurfaceMesh {
            positions: vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
            ],
            normals: vec![DVec3::Z; 4],
            tangents: vec![DVec3::X; 4],
            uvs: vec![Point2::ZERO; 4],
            triangles: vec![0, 2, 1, 1, 2, 3],
            lines: vec![0, 1, 0, 2],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = single_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.line_count(), 2);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = single_quad();
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = SurfaceMesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.line_count(), 0);
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::ZERO);
    }
}
