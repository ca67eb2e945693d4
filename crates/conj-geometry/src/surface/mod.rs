//! Surface traits and implementations.

mod conjugation;

use conj_math::{Point2, Point3, Vector3};

pub use conjugation::ConjugationSurface;

/// A single evaluated surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Point3,
    /// Unit length, or zero where the analytic normal degenerates
    pub normal: Vector3,
    /// Unit-length u-tangent, or zero where degenerate
    pub tangent: Vector3,
    pub uv: Point2,
}

/// Trait for parametric surfaces in 3D space.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Evaluate the surface normal at parameters `(u, v)`.
    fn normal_at(&self, u: f64, v: f64) -> Vector3;

    /// Evaluate the u-direction tangent at parameters `(u, v)`.
    fn tangent_at(&self, u: f64, v: f64) -> Vector3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_start, v_end)`.
    ///
    /// The end may be smaller than the start; grid samplers walk the
    /// domain signed.
    fn domain_v(&self) -> (f64, f64);

    /// Evaluate position, normal, tangent, and UV in one call.
    ///
    /// The default composes the individual evaluators and maps the
    /// parameters linearly onto the domain for UV. Implementations on the
    /// tessellation hot path override this to share intermediate work.
    fn sample(&self, u: f64, v: f64) -> SurfacePoint {
        let (u0, u1) = self.domain_u();
        let (v0, v1) = self.domain_v();
        SurfacePoint {
            position: self.point_at(u, v),
            normal: self.normal_at(u, v),
            tangent: self.tangent_at(u, v),
            uv: Point2::new((u - u0) / (u1 - u0), (v - v0) / (v1 - v0)),
        }
    }
}
