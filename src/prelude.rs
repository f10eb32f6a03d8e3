//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the launchplan crate.
//!
//! # Example
//!
//! ```rust
//! use launchplan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let inputs = StaticInputs::new(vec!["0xf39f".to_string()]);
//! let mut namespace = Namespace::new();
//!
//! let mut builder = Builder::new(&inputs);
//! let deployer = builder.account(0)?;
//! let contract = builder.add_action("TicketNFT", [deployer])?;
//! let module = builder.finalize(&mut namespace, "TicketNFTModule", [("contract", contract)])?;
//!
//! println!("{}", PlanFormatter::format_plan(&module));
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Graph construction
pub use crate::builder::{ActionSpec, Builder};
pub use crate::module::{Action, ActionKind, Module, Namespace, Resolved};

// Future values and literals
pub use crate::future::{ActionId, Argument, FutureValue, InputKind, Value};

// External capabilities
pub use crate::catalog::{EntityCatalog, EntityDescriptor, StaticCatalog};
pub use crate::inputs::{InputSource, StaticInputs};

// Declarative definitions and artifacts
pub use crate::definition::{IntoDefinition, ModuleArtifact, ModuleDefinition};

// Error types
pub use crate::error::{ArtifactError, BuildError, DefinitionError, InputError};

// Plan formatting
pub use crate::report::PlanFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
