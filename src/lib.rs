//! # Launchplan - Declarative Deployment Graphs
//!
//! **Launchplan** describes deployments as data. Instead of performing side effects, a
//! caller records *actions* ("deploy entity X with arguments A1..An") on a builder and
//! receives *future values* standing in for results that only exist after an execution
//! engine has run those actions. Passing a future value into a later action wires the
//! dependency implicitly. The finished graph is an immutable, named [`Module`] that an
//! external engine can schedule, execute idempotently, and resume.
//!
//! ## Core Workflow
//!
//! 1.  **Provide Inputs**: Implement [`InputSource`] (or load [`StaticInputs`] from JSON) for
//!     the accounts and parameters known ahead of time.
//! 2.  **Build**: Create a [`Builder`] with the input source and record actions. Static
//!     inputs are checked immediately; references to actions that do not exist yet are
//!     rejected, which makes cycles impossible by construction.
//! 3.  **Finalize**: Freeze the builder into a [`Module`] under a name that is unique in
//!     your [`Namespace`], exporting selected future values.
//! 4.  **Hand Off**: Give the module to an engine directly, as a bincode
//!     [`ModuleArtifact`](definition::ModuleArtifact), or as the JSON exchange document.
//!
//! ## Quick Start
//!
//! ```rust
//! use launchplan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let inputs = StaticInputs::new(vec!["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string()]);
//!     let mut namespace = Namespace::new();
//!
//!     let mut builder = Builder::new(&inputs);
//!     let deployer = builder.account(0)?;
//!     let contract = builder.add_action("TicketNFT", [deployer])?;
//!     let module = builder.finalize(&mut namespace, "TicketNFTModule", [("contract", contract)])?;
//!
//!     assert_eq!(module.len(), 1);
//!     assert_eq!(module.output("contract"), Some(&contract));
//!
//!     // Inspect the plan the engine will receive.
//!     println!("{}", PlanFormatter::format_plan(&module));
//!     Ok(())
//! }
//! ```
//!
//! [`Module`]: module::Module
//! [`Builder`]: builder::Builder
//! [`Namespace`]: module::Namespace
//! [`InputSource`]: inputs::InputSource
//! [`StaticInputs`]: inputs::StaticInputs

pub mod builder;
pub mod catalog;
pub mod definition;
pub mod error;
pub mod future;
pub mod inputs;
pub mod module;
pub mod prelude;
pub mod report;
