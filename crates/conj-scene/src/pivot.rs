//! Movable pivot point on the conjugation surface.

use std::f64::consts::{PI, TAU};

use conj_geometry::{ProfileConstants, Surface};
use conj_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Number of discrete navigation steps across each parameter span.
const STEP_DIVISIONS: f64 = 50.0;

/// Where the pivot position comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotMode {
    /// Follow a `(u, v)` point on the surface
    #[default]
    OnSurface,
    /// A user-entered world-space point
    Custom,
}

/// One discrete navigation step. The UI maps the A/D keys to `Left`/`Right`
/// (angular) and the S/W keys to `Down`/`Up` (height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Left,
    Right,
    Up,
    Down,
}

/// Pivot state owned by the scene.
///
/// `uv` stays `None` until the first regeneration seeds it or the user
/// moves it, so a pivot placed at exactly `(0, 0)` is a legitimate value
/// and is never clobbered by later parameter edits.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PivotState {
    pub mode: PivotMode,
    pub uv: Option<Point2>,
    pub custom: Point3,
}

impl PivotState {
    /// Domain midpoint used as the initial pivot: the angular opposite
    /// side at mid-height.
    pub fn default_uv(constants: &ProfileConstants) -> Point2 {
        Point2::new(PI, constants.v_max() / 2.0)
    }

    /// Seed the surface pivot, first-call-wins: does nothing once `uv` is
    /// set, whether by an earlier seed or by the user.
    pub fn ensure_default(&mut self, constants: &ProfileConstants) {
        if self.uv.is_none() {
            self.uv = Some(Self::default_uv(constants));
        }
    }

    /// Apply one navigation step.
    ///
    /// The angle wraps modulo `2*PI` in both directions; the height is
    /// clamped to `[0, v_max]`. The bound is taken from the constants
    /// passed in, since the parameters may have changed since the pivot
    /// last moved.
    pub fn step(&mut self, step: NavStep, constants: &ProfileConstants) {
        let mut uv = self.uv.unwrap_or_else(|| Self::default_uv(constants));
        let v_max = constants.v_max();
        let step_u = TAU / STEP_DIVISIONS;
        let step_v = v_max / STEP_DIVISIONS;

        match step {
            NavStep::Left => {
                uv.x -= step_u;
                if uv.x < 0.0 {
                    uv.x += TAU;
                }
            }
            NavStep::Right => {
                uv.x += step_u;
                if uv.x > TAU {
                    uv.x -= TAU;
                }
            }
            NavStep::Down => uv.y = (uv.y - step_v).max(0.0),
            NavStep::Up => uv.y = (uv.y + step_v).min(v_max),
        }

        self.uv = Some(uv);
    }

    /// World-space pivot position: the evaluated surface point in
    /// `OnSurface` mode, the stored vector verbatim in `Custom` mode.
    pub fn resolve(&self, surface: &dyn Surface, constants: &ProfileConstants) -> Point3 {
        match self.mode {
            PivotMode::Custom => self.custom,
            PivotMode::OnSurface => {
                let uv = self.uv.unwrap_or_else(|| Self::default_uv(constants));
                surface.point_at(uv.x, uv.y)
            }
        }
    }
}
