use ahash::AHashSet;
use itertools::Itertools;

/// The set of module names already claimed by a caller.
///
/// Finalizing a builder claims its module name here; a second module with the same
/// name is rejected.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    names: AHashSet<String>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Claimed names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).sorted().collect()
    }

    /// Returns `false` if the name was already claimed.
    pub(crate) fn claim(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }
}
