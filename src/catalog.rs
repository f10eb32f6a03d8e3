use crate::error::InputError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the catalog knows about an entity that actions can instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub name: String,
    /// Number of constructor inputs, when the catalog records it.
    #[serde(default)]
    pub constructor_inputs: Option<usize>,
}

/// Lookup of entity names to descriptors.
///
/// The builder never consults the catalog; whether a target exists is checked by the
/// consumer of a finished module, typically the execution engine.
pub trait EntityCatalog {
    fn resolve_target(&self, name: &str) -> Option<EntityDescriptor>;
}

/// A catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entities: AHashMap<String, EntityDescriptor>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, descriptor: EntityDescriptor) {
        self.entities.insert(descriptor.name.clone(), descriptor);
    }

    pub fn with_entity(mut self, name: &str, constructor_inputs: Option<usize>) -> Self {
        self.insert(EntityDescriptor {
            name: name.to_string(),
            constructor_inputs,
        });
        self
    }

    /// Parses a JSON array of entity descriptors.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let descriptors: Vec<EntityDescriptor> = serde_json::from_str(json)
            .map_err(|e| InputError::Load(format!("Invalid catalog JSON: {}", e)))?;
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor);
        }
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InputError::Load(format!("Could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityCatalog for StaticCatalog {
    fn resolve_target(&self, name: &str) -> Option<EntityDescriptor> {
        self.entities.get(name).cloned()
    }
}
