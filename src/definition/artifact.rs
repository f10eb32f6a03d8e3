use crate::error::ArtifactError;
use crate::future::{Argument, FutureValue};
use crate::module::Module;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Version stamped into every binary artifact.
pub const ARTIFACT_VERSION: u32 = 1;

/// A finalized module packaged for storage or hand-off to an execution engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleArtifact {
    pub version: u32,
    pub module: Module,
}

impl ModuleArtifact {
    pub fn new(module: Module) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            module,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes an artifact, rejecting versions this crate does not understand and
    /// modules whose actions do not form a valid backward-referencing sequence.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (artifact, _): (Self, usize) =
            decode_from_slice(bytes, standard()).map_err(|e| ArtifactError::Decode(e.to_string()))?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(ArtifactError::Decode(format!(
                "unsupported artifact version {} (expected {})",
                artifact.version, ARTIFACT_VERSION
            )));
        }
        artifact.module.validate().map_err(ArtifactError::Invalid)?;
        Ok(artifact)
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}

/// Renders a module in the engine exchange shape: the module name, the ordered actions
/// with tagged literal-or-reference arguments, and the output map.
pub fn exchange_document(module: &Module) -> serde_json::Value {
    let actions: Vec<serde_json::Value> = module
        .actions()
        .iter()
        .map(|action| {
            json!({
                "id": action.id().0,
                "label": action.label(),
                "kind": action.kind().as_str(),
                "target": action.target(),
                "receiver": action.receiver().map(reference_json),
                "arguments": action.arguments().iter().map(argument_json).collect::<Vec<_>>(),
                "after": action.after().iter().map(reference_json).collect::<Vec<_>>(),
            })
        })
        .collect();

    let outputs: serde_json::Map<String, serde_json::Value> = module
        .outputs()
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(key, future)| (key.clone(), reference_json(future)))
        .collect();

    json!({
        "module": module.name(),
        "actions": actions,
        "outputs": outputs,
    })
}

fn argument_json(argument: &Argument) -> serde_json::Value {
    match argument {
        Argument::Literal(value) => json!({ "literal": value.to_json() }),
        Argument::Reference(future) => json!({ "reference": reference_json(future) }),
    }
}

fn reference_json(future: &FutureValue) -> serde_json::Value {
    match future {
        FutureValue::StaticInput { kind, index } => {
            json!({ "static": kind.to_string(), "index": index })
        }
        FutureValue::ActionResult { action, index, .. } => {
            json!({ "action": action.0, "result": index })
        }
    }
}
