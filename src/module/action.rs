use crate::future::{ActionId, Argument, FutureValue};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an action asks the execution engine to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// Instantiate the named entity with the given constructor arguments.
    #[default]
    DeployEntity,
    /// Instantiate a library other entities link against.
    DeployLibrary,
    /// Bind to an entity that already exists; the first argument is its address.
    AttachExisting,
    /// Invoke a state-changing function on a previously produced entity.
    Call,
    /// Invoke a read-only function; its return values become action results.
    StaticCall,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::DeployEntity => "deploy-entity",
            ActionKind::DeployLibrary => "deploy-library",
            ActionKind::AttachExisting => "attach-existing",
            ActionKind::Call => "call",
            ActionKind::StaticCall => "static-call",
        }
    }

    /// Whether `target` names an entity in the catalog (as opposed to a function name).
    pub fn targets_entity(&self) -> bool {
        matches!(
            self,
            ActionKind::DeployEntity | ActionKind::DeployLibrary | ActionKind::AttachExisting
        )
    }

    /// Whether the action operates on a previously produced entity.
    pub fn needs_receiver(&self) -> bool {
        matches!(self, ActionKind::Call | ActionKind::StaticCall)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One deployment step recorded in a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub(crate) id: ActionId,
    pub(crate) kind: ActionKind,
    pub(crate) target: String,
    pub(crate) label: Option<String>,
    pub(crate) receiver: Option<FutureValue>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) after: Vec<FutureValue>,
    pub(crate) results: u32,
}

impl Action {
    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The explicit label, or the target when none was given.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }

    pub fn receiver(&self) -> Option<&FutureValue> {
        self.receiver.as_ref()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn after(&self) -> &[FutureValue] {
        &self.after
    }

    /// Number of results this action yields.
    pub fn results(&self) -> u32 {
        self.results
    }

    /// Every future value the action refers to: receiver, arguments, then `after`.
    pub fn references(&self) -> impl Iterator<Item = &FutureValue> {
        self.receiver
            .iter()
            .chain(self.arguments.iter().filter_map(Argument::as_reference))
            .chain(self.after.iter())
    }

    /// The distinct producing actions this action depends on, in first-use order.
    pub fn dependencies(&self) -> Vec<ActionId> {
        self.references()
            .filter_map(FutureValue::producer)
            .unique()
            .collect()
    }

    /// Human-readable id of the form `Module#label`.
    pub fn display_id(&self, module_name: &str) -> String {
        format!("{}#{}", module_name, self.label())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.kind, self.target)?;
        if let Some(receiver) = &self.receiver {
            write!(f, " on {}", receiver)?;
        }
        write!(f, "({})", self.arguments.iter().join(", "))
    }
}
