//! Conjugation surface: a surface of revolution whose radius oscillates
//! with height by a cosine cam law.

use std::f64::consts::{PI, TAU};

use conj_core::Guards;
use conj_math::{DVec3, Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::profile::{ProfileConstants, ProfilePolicy, SurfaceParams};

use super::{Surface, SurfacePoint};

/// The conjugation surface, parameterized by angle `u` in `[0, 2*PI]` and
/// height `v` in `[0, b]` (`b` is the signed height bound of the profile).
///
/// Points are computed as:
/// `P(u, v) = (r(v)*cos(u), r(v)*sin(u), v - b/2)` with
/// `r(v) = a*(1 - cos(2*PI*v/c)) + r1`,
/// so the radius oscillates between `r1` and `r1 + 2a` with period `c`.
///
/// Construction precomputes the profile constants once; evaluation is a
/// total function over all finite `(u, v)` and never fails, so a full
/// tessellation grid can call it without any per-point solver work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugationSurface {
    pub r1: f64,
    pub constants: ProfileConstants,
    guards: Guards,
}

impl ConjugationSurface {
    pub fn new(params: &SurfaceParams, policy: ProfilePolicy) -> Self {
        let guards = Guards::default();
        Self {
            r1: params.r1,
            constants: ProfileConstants::compute_with(params, policy, guards),
            guards,
        }
    }

    /// Radius of the ring at height parameter `v`.
    ///
    /// A zero period means equal radii collapsed the oscillation; the
    /// surface is then a plain cylinder of radius `r1`.
    pub fn radius_at(&self, v: f64) -> f64 {
        let c = self.constants.period;
        if c == 0.0 {
            return self.r1;
        }
        self.constants.amplitude * (1.0 - (TAU * v / c).cos()) + self.r1
    }

    /// Derivative of the ring radius with respect to `v`.
    pub fn radius_slope_at(&self, v: f64) -> f64 {
        let c = self.constants.period;
        if c == 0.0 {
            return 0.0;
        }
        self.constants.amplitude * (TAU / c) * (TAU * v / c).sin()
    }

    fn normalize_or_zero(&self, v: Vector3) -> Vector3 {
        let len = v.length();
        if self.guards.is_degenerate_length(len) {
            Vector3::ZERO
        } else {
            v / len
        }
    }
}

impl Surface for ConjugationSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius_at(v);
        DVec3::new(
            r * u.cos(),
            r * u.sin(),
            v - self.constants.height_bound / 2.0,
        )
    }

    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        self.sample(u, v).normal
    }

    fn tangent_at(&self, u: f64, v: f64) -> Vector3 {
        self.sample(u, v).tangent
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, self.constants.height_bound)
    }

    fn sample(&self, u: f64, v: f64) -> SurfacePoint {
        let b = self.constants.height_bound;
        let r = self.radius_at(v);
        let dr = self.radius_slope_at(v);
        let (sin_u, cos_u) = u.sin_cos();

        let position = DVec3::new(r * cos_u, r * sin_u, v - b / 2.0);

        // Partial derivatives of the parameterization
        let tangent_u = DVec3::new(-r * sin_u, r * cos_u, 0.0);
        let tangent_v = DVec3::new(dr * cos_u, dr * sin_u, 1.0);

        // Degenerates where r = 0 (poles); left as zero instead of
        // dividing by a near-zero length
        let normal = self.normalize_or_zero(tangent_u.cross(tangent_v));
        let tangent = self.normalize_or_zero(tangent_u);

        let uv_y = if b == 0.0 { 0.0 } else { v / b };
        SurfacePoint {
            position,
            normal,
            tangent,
            uv: Point2::new(u / TAU, uv_y),
        }
    }
}
