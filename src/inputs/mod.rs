pub mod model;

pub use model::*;

use crate::error::InputError;
use crate::future::{InputKind, Value};

/// The capability that supplies statically known inputs (accounts, parameters).
///
/// It is injected into a [`Builder`](crate::builder::Builder) at construction time so that
/// out-of-range inputs are reported while the graph is described, not when it executes.
pub trait InputSource {
    /// Number of inputs of `kind` the source declares available.
    fn count(&self, kind: InputKind) -> usize;

    /// Fetches the concrete value of an input.
    fn get_input(&self, kind: InputKind, index: usize) -> Result<Value, InputError>;

    /// Looks up the position of a named input. Sources without names return `None`.
    fn position(&self, _kind: InputKind, _name: &str) -> Option<usize> {
        None
    }
}
