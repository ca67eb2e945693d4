pub mod error;
pub mod guards;

pub use error::{ConjError, Result};
pub use guards::Guards;
