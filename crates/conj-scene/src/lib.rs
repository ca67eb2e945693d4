//! ConjSurf scene layer: owned parameter/pivot/mesh state and the
//! flat-buffer boundary handed to the renderer.

pub mod gpu;
pub mod pivot;
pub mod state;

pub use gpu::{prepare_mesh, GpuVertex, RenderMesh};
pub use pivot::{NavStep, PivotMode, PivotState};
pub use state::{ObjectRotation, SceneState};
