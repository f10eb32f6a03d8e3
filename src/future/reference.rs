use super::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(1);
static PROCESS_SALT: OnceLock<u64> = OnceLock::new();

/// Identifies the builder that minted an `ActionResult`.
///
/// The upper 32 bits are a random per-process salt and the lower 32 bits a counter, so
/// ids are unique within a process and a module loaded from an artifact written by
/// another process is very unlikely to share an id with a live builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        let salt = *PROCESS_SALT.get_or_init(|| {
            ahash::RandomState::new().hash_one(std::process::id()) & 0xffff_ffff_0000_0000
        });
        let counter = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);
        GraphId(salt | u64::from(counter))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Position of an action in its module, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u32);

impl ActionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kinds of statically known inputs an input source can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    Account,
    Parameter,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Account => write!(f, "account"),
            InputKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// A placeholder for a value that is not known while the graph is being described.
///
/// Two future values are equal iff they are the same variant and point at the same
/// underlying reference. For `ActionResult` that includes the graph which minted it, so
/// results of two different builders never compare equal even when their ids coincide.
///
/// A [`Builder`](crate::builder::Builder) validates every future value it receives, so a
/// hand-built or deserialized value is rejected unless it matches something it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FutureValue {
    /// An input resolved against the input source at construction time.
    StaticInput { kind: InputKind, index: u32 },
    /// The `index`-th result of an action, available only once the action has executed.
    ActionResult {
        graph: GraphId,
        action: ActionId,
        index: u32,
    },
}

impl FutureValue {
    pub(crate) fn static_input(kind: InputKind, index: u32) -> Self {
        FutureValue::StaticInput { kind, index }
    }

    pub(crate) fn action_result(graph: GraphId, action: ActionId, index: u32) -> Self {
        FutureValue::ActionResult {
            graph,
            action,
            index,
        }
    }

    /// The id of the producing action, if this is an action result.
    pub fn producer(&self) -> Option<ActionId> {
        match self {
            FutureValue::ActionResult { action, .. } => Some(*action),
            FutureValue::StaticInput { .. } => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, FutureValue::StaticInput { .. })
    }
}

impl fmt::Display for FutureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FutureValue::StaticInput { kind, index } => write!(f, "{}[{}]", kind, index),
            FutureValue::ActionResult {
                action, index: 0, ..
            } => write!(f, "result({})", action),
            FutureValue::ActionResult { action, index, .. } => {
                write!(f, "result({}).{}", action, index)
            }
        }
    }
}

/// A single action argument: either a literal known now or a reference resolved later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    Literal(Value),
    Reference(FutureValue),
}

impl Argument {
    pub fn as_reference(&self) -> Option<&FutureValue> {
        match self {
            Argument::Reference(future) => Some(future),
            Argument::Literal(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Literal(value) => write!(f, "{}", value),
            Argument::Reference(future) => write!(f, "{}", future),
        }
    }
}

impl From<FutureValue> for Argument {
    fn from(value: FutureValue) -> Self {
        Argument::Reference(value)
    }
}

impl From<&FutureValue> for Argument {
    fn from(value: &FutureValue) -> Self {
        Argument::Reference(*value)
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Literal(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Literal(value.into())
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Literal(value.into())
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Literal(value.into())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Literal(value.into())
    }
}
