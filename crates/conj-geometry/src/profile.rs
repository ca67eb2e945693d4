//! Profile solver: derived scalar constants of the conjugation profile.

use std::f64::consts::PI;

use conj_core::Guards;
use serde::{Deserialize, Serialize};

/// User-facing parameters of the conjugation surface.
///
/// The profile angle is always in radians; UI layers supplying degrees
/// convert before constructing this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParams {
    pub r1: f64,
    pub r2: f64,
    /// Profile angle in radians
    pub profile_angle: f64,
    pub u_steps: usize,
    pub v_steps: usize,
}

impl SurfaceParams {
    pub fn new(r1: f64, r2: f64, profile_angle: f64, u_steps: usize, v_steps: usize) -> Self {
        Self {
            r1,
            r2,
            profile_angle,
            u_steps,
            v_steps,
        }
    }

    /// Geometry-side normalization: when `r1 < r2` the profile angle is
    /// negated, which keeps the surface orientation and pivot motion
    /// consistent. The stored UI-facing value is untouched.
    pub fn effective(&self) -> SurfaceParams {
        let mut p = *self;
        if p.r1 < p.r2 {
            p.profile_angle = -p.profile_angle;
        }
        p
    }
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            r1: 3.0,
            r2: 2.0,
            profile_angle: PI / 6.0,
            u_steps: 30,
            v_steps: 30,
        }
    }
}

/// Amplitude convention for the radial oscillation.
///
/// Two conventions are in circulation: the full radius difference, and
/// the book's corrected derivation that halves it. Selectable so
/// consumers can pick either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmplitudeLaw {
    /// `a = r2 - r1`
    #[default]
    Difference,
    /// `a = (r2 - r1) / 2` (the book's corrected value)
    HalfDifference,
}

impl AmplitudeLaw {
    pub fn amplitude(self, r1: f64, r2: f64) -> f64 {
        match self {
            AmplitudeLaw::Difference => r2 - r1,
            AmplitudeLaw::HalfDifference => (r2 - r1) / 2.0,
        }
    }
}

/// Usable v-domain bound as a fraction of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeightBoundLaw {
    /// `b = 3c/4`
    #[default]
    ThreeQuarterPeriod,
    /// `b = c`
    FullPeriod,
}

impl HeightBoundLaw {
    pub fn bound(self, period: f64) -> f64 {
        match self {
            HeightBoundLaw::ThreeQuarterPeriod => 3.0 * period / 4.0,
            HeightBoundLaw::FullPeriod => period,
        }
    }
}

/// Which amplitude/bound convention the solver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfilePolicy {
    pub amplitude: AmplitudeLaw,
    pub bound: HeightBoundLaw,
}

/// Scalars derived from `SurfaceParams`: oscillation amplitude `a`,
/// height period `c`, and usable v-domain bound `b`.
///
/// A pure function of the parameters; always finite. Equal radii give
/// `a = 0` (the surface collapses to a cylinder of radius `r1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConstants {
    pub amplitude: f64,
    pub period: f64,
    pub height_bound: f64,
}

impl ProfileConstants {
    pub fn compute(params: &SurfaceParams, policy: ProfilePolicy) -> Self {
        Self::compute_with(params, policy, Guards::default())
    }

    pub fn compute_with(params: &SurfaceParams, policy: ProfilePolicy, guards: Guards) -> Self {
        let amplitude = policy.amplitude.amplitude(params.r1, params.r2);
        let tan_phi = guards.floor_tangent(params.profile_angle.tan());
        let period = -2.0 * PI * amplitude / tan_phi;
        let height_bound = policy.bound.bound(period);
        Self {
            amplitude,
            period,
            height_bound,
        }
    }

    /// Upper navigation bound along v, shared by pivot stepping and UI
    /// consumers. The signed bound is the tessellation domain end.
    pub fn v_max(&self) -> f64 {
        self.height_bound.abs()
    }
}
