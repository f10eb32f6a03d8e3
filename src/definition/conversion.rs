use super::model::ModuleDefinition;
use crate::error::DefinitionError;

/// A trait for custom data models that can be converted into a `ModuleDefinition`.
///
/// Implement it on your own configuration structs to feed any deployment format into
/// the builder without going through the JSON shape.
///
/// # Example
///
/// ```rust
/// use launchplan::prelude::*;
/// use launchplan::definition::{ActionDefinition, ArgumentDefinition, IntoDefinition};
/// use std::result::Result;
///
/// struct SingleDeploy {
///     contract: String,
///     owner_account: i64,
/// }
///
/// impl IntoDefinition for SingleDeploy {
///     fn into_definition(self) -> Result<ModuleDefinition, DefinitionError> {
///         if self.contract.is_empty() {
///             return Err(DefinitionError::Validation("contract name is empty".to_string()));
///         }
///         let mut definition = ModuleDefinition {
///             name: format!("{}Module", self.contract),
///             ..Default::default()
///         };
///         definition.actions.push(ActionDefinition {
///             kind: Default::default(),
///             target: self.contract.clone(),
///             label: None,
///             on: None,
///             args: vec![ArgumentDefinition::Account(self.owner_account)],
///             after: vec![],
///             results: None,
///         });
///         definition
///             .outputs
///             .insert("contract".to_string(), ArgumentDefinition::Reference(self.contract));
///         Ok(definition)
///     }
/// }
///
/// let inputs = StaticInputs::new(vec!["0xf39f".to_string()]);
/// let mut namespace = Namespace::new();
/// let module = SingleDeploy { contract: "TicketNFT".to_string(), owner_account: 0 }
///     .into_definition()
///     .unwrap()
///     .build(&inputs, &mut namespace)
///     .unwrap();
/// assert_eq!(module.name(), "TicketNFTModule");
/// ```
pub trait IntoDefinition {
    /// Consumes the object and converts it into a module definition.
    fn into_definition(self) -> Result<ModuleDefinition, DefinitionError>;
}

impl IntoDefinition for ModuleDefinition {
    fn into_definition(self) -> Result<ModuleDefinition, DefinitionError> {
        Ok(self)
    }
}
