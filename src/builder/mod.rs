mod action_spec;

pub use action_spec::ActionSpec;

use crate::error::BuildError;
use crate::future::{ActionId, Argument, FutureValue, GraphId, InputKind};
use crate::inputs::InputSource;
use crate::module::{Action, Module, Namespace, ReferenceIssue, check_reference};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
enum BuilderState {
    Open,
    Finalized { module: String },
}

/// Accumulates deployment actions and hands out future values for their results.
///
/// A builder is single-use: it is `Open` until [`finalize`](Builder::finalize) succeeds,
/// after which every mutating call fails with `BuilderAlreadyFinalized`. Failed calls
/// never record partial state.
///
/// The builder is a plain owned accumulator and is not meant to be shared between
/// threads while it is open. The `Module` it produces is immutable and can be.
pub struct Builder<'a> {
    graph: GraphId,
    inputs: &'a dyn InputSource,
    actions: Vec<Action>,
    labels: AHashSet<String>,
    state: BuilderState,
}

impl<'a> Builder<'a> {
    pub fn new(inputs: &'a dyn InputSource) -> Self {
        Self {
            graph: GraphId::next(),
            inputs,
            actions: Vec::new(),
            labels: AHashSet::new(),
            state: BuilderState::Open,
        }
    }

    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Number of actions recorded so far.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, BuilderState::Finalized { .. })
    }

    /// Produces a future value for a static input, checking it against the input source now.
    pub fn resolve_static(&self, kind: InputKind, index: i64) -> Result<FutureValue, BuildError> {
        let available = self.inputs.count(kind);
        let invalid = || BuildError::InvalidInput {
            kind,
            index,
            available,
        };

        let position = usize::try_from(index).map_err(|_| invalid())?;
        let slot = u32::try_from(position).map_err(|_| invalid())?;
        if position >= available {
            return Err(invalid());
        }
        self.inputs
            .get_input(kind, position)
            .map_err(|_| invalid())?;

        Ok(FutureValue::static_input(kind, slot))
    }

    /// Shorthand for `resolve_static(InputKind::Account, index)`.
    pub fn account(&self, index: i64) -> Result<FutureValue, BuildError> {
        self.resolve_static(InputKind::Account, index)
    }

    /// Resolves a parameter by name through the input source.
    pub fn parameter(&self, name: &str) -> Result<FutureValue, BuildError> {
        let position = self
            .inputs
            .position(InputKind::Parameter, name)
            .ok_or_else(|| BuildError::UnknownInputName {
                kind: InputKind::Parameter,
                name: name.to_string(),
            })?;
        self.resolve_static(InputKind::Parameter, position as i64)
    }

    /// Records a deploy-entity action for `target` and returns its result.
    pub fn add_action<I, A>(&mut self, target: &str, arguments: I) -> Result<FutureValue, BuildError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.add(ActionSpec::deploy(target).with_arguments(arguments))
    }

    /// Records an action described by `spec` and returns a future value for its first result.
    pub fn add(&mut self, spec: ActionSpec) -> Result<FutureValue, BuildError> {
        self.ensure_open()?;

        if spec.target.is_empty() {
            return Err(BuildError::EmptyIdentifier("Action target"));
        }
        if let Some(label) = &spec.label {
            if label.is_empty() {
                return Err(BuildError::EmptyIdentifier("Action label"));
            }
            if self.labels.contains(label) {
                return Err(BuildError::DuplicateActionLabel(label.clone()));
            }
        }
        if spec.results == 0 {
            return Err(BuildError::NoResults(spec.target.clone()));
        }

        let references = spec
            .receiver
            .iter()
            .chain(spec.arguments.iter().filter_map(Argument::as_reference))
            .chain(spec.after.iter());
        for reference in references {
            self.check(&spec.target, reference)?;
        }

        let id = ActionId(self.actions.len() as u32);
        debug!(
            graph = self.graph.as_u64(),
            id = %id,
            kind = %spec.kind,
            target = %spec.target,
            arguments = spec.arguments.len(),
            "recorded action"
        );

        if let Some(label) = &spec.label {
            self.labels.insert(label.clone());
        }
        self.actions.push(Action {
            id,
            kind: spec.kind,
            target: spec.target,
            label: spec.label,
            receiver: spec.receiver,
            arguments: spec.arguments,
            after: spec.after,
            results: spec.results,
        });

        Ok(FutureValue::action_result(self.graph, id, 0))
    }

    /// Selects the `index`-th result of an action produced by this builder.
    pub fn result(&self, future: &FutureValue, index: u32) -> Result<FutureValue, BuildError> {
        let FutureValue::ActionResult { action, .. } = *future else {
            return Err(BuildError::UnknownReference {
                reference: *future,
                reason: "static inputs have no numbered results".to_string(),
            });
        };
        let selected = FutureValue::action_result(self.graph, action, index);
        check_reference(self.graph, &self.actions, future)
            .and_then(|_| check_reference(self.graph, &self.actions, &selected))
            .map_err(|issue| issue.into_error(&selected))?;
        Ok(selected)
    }

    /// Freezes the accumulated actions into a named module.
    ///
    /// Output keys must be distinct. On any error the builder stays open and the
    /// namespace is left untouched, so the caller can retry with corrected input.
    pub fn finalize<I, K>(
        &mut self,
        namespace: &mut Namespace,
        name: &str,
        outputs: I,
    ) -> Result<Module, BuildError>
    where
        I: IntoIterator<Item = (K, FutureValue)>,
        K: Into<String>,
    {
        self.ensure_open()?;

        if name.is_empty() {
            return Err(BuildError::EmptyIdentifier("Module name"));
        }
        if namespace.contains(name) {
            return Err(BuildError::DuplicateModuleName(name.to_string()));
        }

        let mut exports = AHashMap::new();
        for (key, future) in outputs {
            self.check_static(&future)?;
            check_reference(self.graph, &self.actions, &future)
                .map_err(|issue| issue.into_error(&future))?;
            let key: String = key.into();
            if exports.contains_key(&key) {
                return Err(BuildError::DuplicateOutputKey(key));
            }
            exports.insert(key, future);
        }

        namespace.claim(name);
        self.state = BuilderState::Finalized {
            module: name.to_string(),
        };
        info!(
            module = name,
            actions = self.actions.len(),
            outputs = exports.len(),
            "finalized module"
        );

        Ok(Module {
            name: name.to_string(),
            graph: self.graph,
            actions: std::mem::take(&mut self.actions),
            outputs: exports,
        })
    }

    fn ensure_open(&self) -> Result<(), BuildError> {
        match &self.state {
            BuilderState::Open => Ok(()),
            BuilderState::Finalized { module } => {
                Err(BuildError::BuilderAlreadyFinalized(module.clone()))
            }
        }
    }

    /// Static inputs must still be in range of the injected input source, however they
    /// were obtained.
    fn check_static(&self, reference: &FutureValue) -> Result<(), BuildError> {
        match *reference {
            FutureValue::StaticInput { kind, index } => self
                .resolve_static(kind, i64::from(index))
                .map(|_| ()),
            FutureValue::ActionResult { .. } => Ok(()),
        }
    }

    fn check(&self, target: &str, reference: &FutureValue) -> Result<(), BuildError> {
        self.check_static(reference)?;
        check_reference(self.graph, &self.actions, reference).map_err(|issue| match issue {
            ReferenceIssue::NotYetProduced => BuildError::CyclicDependency {
                target: target.to_string(),
                reference: reference.producer().unwrap_or(ActionId(0)),
                accumulated: self.actions.len(),
            },
            other => other.into_error(reference),
        })
    }
}
