pub mod reference;
pub mod value;

pub use reference::*;
pub use value::*;
