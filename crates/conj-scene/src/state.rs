//! Owned scene state: the single home of parameters, pivot, and mesh.

use conj_core::Result;
use conj_geometry::{ConjugationSurface, ProfileConstants, ProfilePolicy, SurfaceParams};
use conj_math::{Axis, Point3, Transform};
use conj_mesh::{tessellate_grid, SurfaceMesh};
use serde::{Deserialize, Serialize};

use crate::pivot::{NavStep, PivotState};

/// Object rotation applied about the pivot, driven by the UI slider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectRotation {
    pub axis: Axis,
    pub degrees: f64,
}

impl Default for ObjectRotation {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            degrees: 0.0,
        }
    }
}

/// All mutable visualizer state, owned explicitly rather than living in
/// globals. Every recomputation runs to completion before the next render;
/// nothing here is shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    pub params: SurfaceParams,
    pub policy: ProfilePolicy,
    pub pivot: PivotState,
    pub rotation: ObjectRotation,
    mesh: Option<SurfaceMesh>,
}

impl SceneState {
    pub fn new(params: SurfaceParams, policy: ProfilePolicy) -> Self {
        Self {
            params,
            policy,
            ..Default::default()
        }
    }

    /// The surface built from the effective (sign-normalized) parameters.
    pub fn surface(&self) -> ConjugationSurface {
        ConjugationSurface::new(&self.params.effective(), self.policy)
    }

    /// Profile constants of the effective parameters.
    pub fn constants(&self) -> ProfileConstants {
        ProfileConstants::compute(&self.params.effective(), self.policy)
    }

    /// Rebuild the mesh from the current parameters.
    ///
    /// Replaces any previous buffers wholesale, then seeds the pivot
    /// default (first build only; a user-placed pivot is kept).
    pub fn regenerate(&mut self) -> Result<&SurfaceMesh> {
        let surface = self.surface();
        let mesh = tessellate_grid(&surface, self.params.u_steps, self.params.v_steps)?;
        self.pivot.ensure_default(&surface.constants);
        Ok(&*self.mesh.insert(mesh))
    }

    /// The current mesh, if one has been generated.
    pub fn mesh(&self) -> Option<&SurfaceMesh> {
        self.mesh.as_ref()
    }

    /// Replace the parameters. The caller regenerates when ready; the
    /// pivot is intentionally left alone.
    pub fn set_params(&mut self, params: SurfaceParams) {
        self.params = params;
    }

    /// Apply one keyboard navigation step to the pivot, against bounds
    /// recomputed from the current parameters.
    pub fn step_pivot(&mut self, step: NavStep) {
        let constants = self.constants();
        self.pivot.step(step, &constants);
    }

    /// World-space pivot position for the current state.
    pub fn pivot_position(&self) -> Point3 {
        let surface = self.surface();
        self.pivot.resolve(&surface, &surface.constants)
    }

    /// Object transform for the render loop: rotation about the pivot.
    pub fn object_transform(&self) -> Transform {
        Transform::rotation_about(
            self.pivot_position(),
            self.rotation.axis,
            self.rotation.degrees.to_radians(),
        )
    }
}
