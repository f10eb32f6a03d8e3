pub mod artifact;
pub mod conversion;
pub mod model;

pub use artifact::*;
pub use conversion::*;
pub use model::*;
