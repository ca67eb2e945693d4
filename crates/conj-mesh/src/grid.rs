//! Grid tessellation: sample a parametric surface over a uniform u/v grid.

use conj_core::{ConjError, Result};
use conj_geometry::Surface;

use crate::{SurfaceMesh, MAX_GRID_VERTICES};

/// Tessellate a parametric surface by uniform subdivision of its domain.
///
/// Generates a `(u_steps+1) * (v_steps+1)` grid of vertices in row-major
/// order (one row per v sample, `index = i * (u_steps+1) + j`), connected by
/// `u_steps * v_steps * 2` triangles and a wireframe line per grid edge
/// leaving each cell's corner. The wireframe deliberately skips the last
/// row's v-edges and the last column's u-edges, which avoids duplicate
/// segments at shared cell borders.
///
/// Regeneration is idempotent: identical inputs yield bit-identical buffers.
///
/// # Errors
/// Fails fast with [`ConjError::Tessellation`] when the grid would exceed
/// [`MAX_GRID_VERTICES`], the 16-bit index space. Indices are never
/// silently truncated.
pub fn tessellate_grid(surface: &dyn Surface, u_steps: usize, v_steps: usize) -> Result<SurfaceMesh> {
    let row_len = u_steps + 1;
    let vert_count = row_len * (v_steps + 1);
    if vert_count > MAX_GRID_VERTICES {
        return Err(ConjError::Tessellation(format!(
            "grid of {}x{} steps needs {} vertices, exceeding the 16-bit index limit of {}",
            u_steps, v_steps, vert_count, MAX_GRID_VERTICES
        )));
    }

    let (u_min, u_max) = surface.domain_u();
    let (v_start, v_end) = surface.domain_v();

    let mut mesh = SurfaceMesh {
        positions: Vec::with_capacity(vert_count),
        normals: Vec::with_capacity(vert_count),
        tangents: Vec::with_capacity(vert_count),
        uvs: Vec::with_capacity(vert_count),
        triangles: Vec::with_capacity(u_steps * v_steps * 6),
        lines: Vec::with_capacity(u_steps * v_steps * 4),
    };

    for i in 0..=v_steps {
        let v = v_start + (v_end - v_start) * i as f64 / v_steps as f64;
        for j in 0..=u_steps {
            let u = u_min + (u_max - u_min) * j as f64 / u_steps as f64;
            let point = surface.sample(u, v);
            mesh.positions.push(point.position);
            mesh.normals.push(point.normal);
            mesh.tangents.push(point.tangent);
            mesh.uvs.push(point.uv);
        }
    }

    for i in 0..v_steps {
        for j in 0..u_steps {
            let p1 = (i * row_len + j) as u16;
            let p2 = p1 + 1;
            let p3 = p1 + row_len as u16;
            let p4 = p3 + 1;

            // Winding keeps the surface front-facing under the evaluator's
            // normal convention
            mesh.triangles.extend_from_slice(&[p1, p3, p2]);
            mesh.triangles.extend_from_slice(&[p2, p3, p4]);

            mesh.lines.extend_from_slice(&[p1, p2]);
            mesh.lines.extend_from_slice(&[p1, p3]);
        }
    }

    Ok(mesh)
}
