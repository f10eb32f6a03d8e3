use crate::future::{ActionId, FutureValue, InputKind};
use thiserror::Error;

/// Errors raised while a deployment graph is being constructed.
///
/// Every variant describes a mistake in the graph description itself. None of them are
/// retried or recovered from internally; they are returned verbatim to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("{kind} input #{index} is not available ({available} declared by the input source)")]
    InvalidInput {
        kind: InputKind,
        index: i64,
        available: usize,
    },

    #[error("Named {kind} input '{name}' is not declared by the input source")]
    UnknownInputName { kind: InputKind, name: String },

    #[error(
        "Action '{target}' references {reference}, which is not produced by an earlier action (only {accumulated} actions exist)"
    )]
    CyclicDependency {
        target: String,
        reference: ActionId,
        accumulated: usize,
    },

    #[error("Module name '{0}' is already used in this namespace")]
    DuplicateModuleName(String),

    #[error("Action label '{0}' is already used in this module")]
    DuplicateActionLabel(String),

    #[error("Output key '{0}' is exported more than once")]
    DuplicateOutputKey(String),

    #[error("Action '{0}' must yield at least one result")]
    NoResults(String),

    #[error("Reference {reference} was not produced by this builder: {reason}")]
    UnknownReference {
        reference: FutureValue,
        reason: String,
    },

    #[error("The builder has already been finalized into module '{0}'")]
    BuilderAlreadyFinalized(String),

    #[error("{0} must be a non-empty identifier")]
    EmptyIdentifier(&'static str),
}

/// Errors returned by an input source when a static input is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{kind} input #{index} is out of range ({available} available)")]
    OutOfRange {
        kind: InputKind,
        index: usize,
        available: usize,
    },

    #[error("Failed to load inputs: {0}")]
    Load(String),
}

/// Errors that can occur when turning a declarative module definition into a `Module`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Failed to parse module definition: {0}")]
    Parse(String),

    #[error("Action #{position} references label '{label}', which no earlier action declares")]
    UnknownLabel { position: usize, label: String },

    #[error("Output '{key}' references label '{label}', which no action declares")]
    UnknownOutputLabel { key: String, label: String },

    #[error("Invalid custom data: {0}")]
    Validation(String),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Errors that can occur while saving or loading a module artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Artifact holds an invalid module: {0}")]
    Invalid(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}
