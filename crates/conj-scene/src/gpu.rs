use conj_math::{Point2, Point3, Vector3};
use conj_mesh::SurfaceMesh;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3, tangent: Vector3, uv: Point2) -> Self {
        Self {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
            tangent: [tangent.x as f32, tangent.y as f32, tangent.z as f32],
            uv: [uv.x as f32, uv.y as f32],
        }
    }

    /// Convert vertex array to raw bytes for GPU upload.
    pub fn as_bytes(vertices: &[GpuVertex]) -> Vec<u8> {
        let size = std::mem::size_of::<GpuVertex>() * vertices.len();
        let mut bytes = Vec::with_capacity(size);
        unsafe {
            let ptr = vertices.as_ptr() as *const u8;
            bytes.extend_from_slice(std::slice::from_raw_parts(ptr, size));
        }
        bytes
    }
}

/// Prepared render data ready for GPU upload.
///
/// This is the "replace all buffers" boundary: the renderer overwrites its
/// previous buffers with these on every regeneration, never applies a delta.
#[derive(Debug, Clone)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub triangle_indices: Vec<u16>,
    pub line_indices: Vec<u16>,
    pub vertex_buffer_bytes: Vec<u8>,
    pub triangle_index_bytes: Vec<u8>,
    pub line_index_bytes: Vec<u8>,
}

/// Convert a SurfaceMesh to GPU-ready buffers.
pub fn prepare_mesh(mesh: &SurfaceMesh) -> RenderMesh {
    let vertex_count = mesh.positions.len();
    let mut vertices = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let pos = mesh.positions[i];
        let normal = mesh.normals.get(i).copied().unwrap_or(Vector3::Y);
        let tangent = mesh.tangents.get(i).copied().unwrap_or(Vector3::X);
        let uv = mesh.uvs.get(i).copied().unwrap_or(Point2::ZERO);

        vertices.push(GpuVertex::from_mesh_vertex(pos, normal, tangent, uv));
    }

    let vertex_buffer_bytes = GpuVertex::as_bytes(&vertices);
    let triangle_index_bytes = indices_to_bytes(&mesh.triangles);
    let line_index_bytes = indices_to_bytes(&mesh.lines);

    RenderMesh {
        vertices,
        triangle_indices: mesh.triangles.clone(),
        line_indices: mesh.lines.clone(),
        vertex_buffer_bytes,
        triangle_index_bytes,
        line_index_bytes,
    }
}

/// Convert a u16 index array to little-endian bytes.
fn indices_to_bytes(indices: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(indices.len() * 2);
    for &i in indices {
        bytes.extend_from_slice(&i.to_le_bytes());
    }
    bytes
}
