pub mod action;
pub mod namespace;
mod plan;

pub use action::*;
pub use namespace::*;

use crate::catalog::EntityCatalog;
use crate::error::BuildError;
use crate::future::{ActionId, FutureValue, GraphId, InputKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A named, immutable deployment graph ready to be handed to an execution engine.
///
/// Actions are stored in declaration order, which is also a valid topological order:
/// an action only ever references results of actions stored before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub(crate) name: String,
    pub(crate) graph: GraphId,
    pub(crate) actions: Vec<Action>,
    pub(crate) outputs: AHashMap<String, FutureValue>,
}

/// What a future value points at inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Static { kind: InputKind, index: u32 },
    Action { action: &'a Action, index: u32 },
}

impl Module {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.index())
    }

    /// Finds an action by its label.
    pub fn find(&self, label: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.label() == label)
    }

    pub fn outputs(&self) -> &AHashMap<String, FutureValue> {
        &self.outputs
    }

    pub fn output(&self, key: &str) -> Option<&FutureValue> {
        self.outputs.get(key)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Resolves a future value against this module's own action sequence.
    pub fn resolve(&self, future: &FutureValue) -> Result<Resolved<'_>, BuildError> {
        check_reference(self.graph, &self.actions, future)
            .map_err(|issue| issue.into_error(future))?;

        Ok(match *future {
            FutureValue::StaticInput { kind, index } => Resolved::Static { kind, index },
            FutureValue::ActionResult { action, index, .. } => Resolved::Action {
                action: &self.actions[action.index()],
                index,
            },
        })
    }

    /// Re-checks the structural invariants of a module obtained from outside a builder.
    ///
    /// Ids must equal positions, every action must yield a result, every reference must
    /// point at an earlier action of this module's graph, and every output must resolve.
    pub fn validate(&self) -> Result<(), String> {
        for (position, action) in self.actions.iter().enumerate() {
            if action.id.index() != position {
                return Err(format!(
                    "action at position {} carries id {}",
                    position, action.id
                ));
            }
            if action.results == 0 {
                return Err(format!("action {} yields no results", action.id));
            }
            for reference in action.references() {
                check_reference(self.graph, &self.actions[..position], reference).map_err(
                    |issue| {
                        format!(
                            "action {} has an invalid reference: {}",
                            action.id,
                            issue.into_error(reference)
                        )
                    },
                )?;
            }
        }
        for (key, future) in &self.outputs {
            check_reference(self.graph, &self.actions, future).map_err(|issue| {
                format!("output '{}' is invalid: {}", key, issue.into_error(future))
            })?;
        }
        Ok(())
    }

    /// Actions whose entity target the catalog cannot resolve.
    ///
    /// Function-call actions are skipped: their target is a function name, not an entity.
    pub fn unresolved_targets(&self, catalog: &dyn EntityCatalog) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.kind.targets_entity())
            .filter(|a| catalog.resolve_target(&a.target).is_none())
            .collect()
    }
}

/// Why a reference is not valid against an action sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReferenceIssue {
    NotYetProduced,
    ForeignGraph,
    ResultOutOfRange { results: u32 },
}

impl ReferenceIssue {
    pub(crate) fn into_error(self, future: &FutureValue) -> BuildError {
        let reason = match self {
            ReferenceIssue::NotYetProduced => "no such action has been recorded".to_string(),
            ReferenceIssue::ForeignGraph => "it belongs to a different builder".to_string(),
            ReferenceIssue::ResultOutOfRange { results } => {
                format!("the producing action only yields {} result(s)", results)
            }
        };
        BuildError::UnknownReference {
            reference: *future,
            reason,
        }
    }
}

/// Checks a future value against the actions accumulated so far. O(1).
pub(crate) fn check_reference(
    graph: GraphId,
    actions: &[Action],
    future: &FutureValue,
) -> Result<(), ReferenceIssue> {
    match *future {
        FutureValue::StaticInput { .. } => Ok(()),
        FutureValue::ActionResult {
            graph: origin,
            action,
            index,
        } => {
            let producer = actions
                .get(action.index())
                .ok_or(ReferenceIssue::NotYetProduced)?;
            if origin != graph {
                return Err(ReferenceIssue::ForeignGraph);
            }
            if index >= producer.results {
                return Err(ReferenceIssue::ResultOutOfRange {
                    results: producer.results,
                });
            }
            Ok(())
        }
    }
}
