use crate::future::{Argument, FutureValue};
use crate::module::ActionKind;

/// Describes an action before it is recorded by a [`Builder`](super::Builder).
///
/// ```rust
/// use launchplan::prelude::*;
///
/// let inputs = StaticInputs::new(vec!["0xf39f".to_string()]);
/// let mut builder = Builder::new(&inputs);
/// let owner = builder.account(0).unwrap();
/// let registry = builder
///     .add(ActionSpec::deploy("Registry").with_label("registry"))
///     .unwrap();
/// builder
///     .add(ActionSpec::call(registry, "transferOwnership").with_argument(owner))
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub(crate) kind: ActionKind,
    pub(crate) target: String,
    pub(crate) label: Option<String>,
    pub(crate) receiver: Option<FutureValue>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) after: Vec<FutureValue>,
    pub(crate) results: u32,
}

impl ActionSpec {
    fn new(kind: ActionKind, target: &str) -> Self {
        Self {
            kind,
            target: target.to_string(),
            label: None,
            receiver: None,
            arguments: Vec::new(),
            after: Vec::new(),
            results: 1,
        }
    }

    /// Instantiate the entity `target`.
    pub fn deploy(target: &str) -> Self {
        Self::new(ActionKind::DeployEntity, target)
    }

    /// Instantiate the library `target`.
    pub fn library(target: &str) -> Self {
        Self::new(ActionKind::DeployLibrary, target)
    }

    /// Bind to an existing instance of `target` found at `address`.
    pub fn attach(target: &str, address: impl Into<Argument>) -> Self {
        Self::new(ActionKind::AttachExisting, target).with_argument(address)
    }

    /// Call `function` on the entity produced by `receiver`.
    pub fn call(receiver: FutureValue, function: &str) -> Self {
        let mut spec = Self::new(ActionKind::Call, function);
        spec.receiver = Some(receiver);
        spec
    }

    /// Read-only call of `function` on `receiver`, yielding `results` values.
    ///
    /// `results` must be at least one; the builder rejects zero with `NoResults`.
    pub fn static_call(receiver: FutureValue, function: &str, results: u32) -> Self {
        let mut spec = Self::new(ActionKind::StaticCall, function);
        spec.receiver = Some(receiver);
        spec.results = results;
        spec
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_argument(mut self, argument: impl Into<Argument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_arguments<I, A>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Orders this action after `future` without passing it as an argument.
    pub fn after(mut self, future: FutureValue) -> Self {
        self.after.push(future);
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}
