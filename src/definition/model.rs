use crate::builder::{ActionSpec, Builder};
use crate::error::DefinitionError;
use crate::future::{Argument, FutureValue, Value};
use crate::inputs::InputSource;
use crate::module::{ActionKind, Module, Namespace};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The canonical, declarative description of a module.
///
/// ```json
/// {
///   "name": "TicketNFTModule",
///   "actions": [{ "target": "TicketNFT", "args": [{ "account": 0 }] }],
///   "outputs": { "contract": { "ref": "TicketNFT" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,
    #[serde(default)]
    pub outputs: BTreeMap<String, ArgumentDefinition>,
}

/// A single action in a module definition.
///
/// Later actions refer to it by `label`, or by `target` when no label is given. If two
/// unlabelled actions share a target, references resolve to the most recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    #[serde(default)]
    pub kind: ActionKind,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    /// The entity a `call` or `static-call` operates on.
    #[serde(default)]
    pub on: Option<ArgumentDefinition>,
    #[serde(default)]
    pub args: Vec<ArgumentDefinition>,
    /// Labels of actions that must complete first.
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub results: Option<u32>,
}

/// An argument or output in a module definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentDefinition {
    Literal(serde_json::Value),
    Account(i64),
    Parameter(String),
    #[serde(rename = "ref")]
    Reference(String),
    Result(String, u32),
}

impl ModuleDefinition {
    /// Parses a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DefinitionError::Parse(format!("Could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Replays the definition through a fresh `Builder` and finalizes it.
    pub fn build(
        &self,
        inputs: &dyn InputSource,
        namespace: &mut Namespace,
    ) -> Result<Module, DefinitionError> {
        debug!(module = %self.name, actions = self.actions.len(), "building module definition");

        let mut builder = Builder::new(inputs);
        let mut produced: AHashMap<&str, FutureValue> = AHashMap::new();

        for (position, action) in self.actions.iter().enumerate() {
            let missing = |label: &str| DefinitionError::UnknownLabel {
                position,
                label: label.to_string(),
            };

            let mut arguments = action
                .args
                .iter()
                .map(|arg| resolve_argument(&builder, &produced, arg, &missing))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter();

            let receiver = action
                .on
                .as_ref()
                .map(|on| resolve_reference(&builder, &produced, on, &missing))
                .transpose()?;

            let mut spec = match action.kind {
                ActionKind::DeployEntity => ActionSpec::deploy(&action.target),
                ActionKind::DeployLibrary => ActionSpec::library(&action.target),
                ActionKind::AttachExisting => {
                    let address = arguments.next().ok_or_else(|| {
                        DefinitionError::Validation(format!(
                            "Action #{} attaches '{}' but gives no address argument",
                            position, action.target
                        ))
                    })?;
                    ActionSpec::attach(&action.target, address)
                }
                ActionKind::Call | ActionKind::StaticCall => {
                    let receiver = receiver.ok_or_else(|| {
                        DefinitionError::Validation(format!(
                            "Action #{} calls '{}' but names no entity to call it on",
                            position, action.target
                        ))
                    })?;
                    if action.kind == ActionKind::Call {
                        ActionSpec::call(receiver, &action.target)
                    } else {
                        ActionSpec::static_call(receiver, &action.target, action.results.unwrap_or(1))
                    }
                }
            }
            .with_arguments(arguments);

            for label in &action.after {
                let dependency = produced
                    .get(label.as_str())
                    .ok_or_else(|| missing(label.as_str()))?;
                spec = spec.after(*dependency);
            }
            if let Some(label) = &action.label {
                spec = spec.with_label(label);
            }

            let future = builder.add(spec)?;
            let key = action.label.as_deref().unwrap_or(&action.target);
            produced.insert(key, future);
        }

        let mut outputs = Vec::with_capacity(self.outputs.len());
        for (key, output) in &self.outputs {
            let missing = |label: &str| DefinitionError::UnknownOutputLabel {
                key: key.clone(),
                label: label.to_string(),
            };
            let future = resolve_reference(&builder, &produced, output, &missing)?;
            outputs.push((key.clone(), future));
        }

        Ok(builder.finalize(namespace, &self.name, outputs)?)
    }
}

fn resolve_argument(
    builder: &Builder<'_>,
    produced: &AHashMap<&str, FutureValue>,
    argument: &ArgumentDefinition,
    missing: &dyn Fn(&str) -> DefinitionError,
) -> Result<Argument, DefinitionError> {
    match argument {
        ArgumentDefinition::Literal(json) => Value::from_json(json)
            .map(Argument::Literal)
            .ok_or_else(|| DefinitionError::Validation(format!("Unsupported literal: {}", json))),
        other => resolve_reference(builder, produced, other, missing).map(Argument::Reference),
    }
}

fn resolve_reference(
    builder: &Builder<'_>,
    produced: &AHashMap<&str, FutureValue>,
    argument: &ArgumentDefinition,
    missing: &dyn Fn(&str) -> DefinitionError,
) -> Result<FutureValue, DefinitionError> {
    let lookup = |label: &str| produced.get(label).copied().ok_or_else(|| missing(label));

    match argument {
        ArgumentDefinition::Literal(json) => Err(DefinitionError::Validation(format!(
            "Expected a reference, found literal {}",
            json
        ))),
        ArgumentDefinition::Account(index) => Ok(builder.account(*index)?),
        ArgumentDefinition::Parameter(name) => Ok(builder.parameter(name)?),
        ArgumentDefinition::Reference(label) => lookup(label.as_str()),
        ArgumentDefinition::Result(label, index) => {
            Ok(builder.result(&lookup(label.as_str())?, *index)?)
        }
    }
}
