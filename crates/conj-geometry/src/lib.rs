//! ConjSurf geometry: the conjugation-surface profile solver and evaluator.

pub mod profile;
pub mod surface;

pub use profile::{AmplitudeLaw, HeightBoundLaw, ProfileConstants, ProfilePolicy, SurfaceParams};
pub use surface::{ConjugationSurface, Surface, SurfacePoint};
