use crate::future::{Argument, FutureValue};
use crate::module::Module;
use itertools::Itertools;
use std::fmt::Write;

/// Formats a module into a human-readable deployment plan.
pub struct PlanFormatter;

impl PlanFormatter {
    /// Renders the module batch by batch, then its outputs.
    ///
    /// ```text
    /// Module TicketNFTModule (1 action)
    ///   Batch 1:
    ///     TicketNFTModule#TicketNFT  deploy-entity TicketNFT(account[0])
    ///   Outputs:
    ///     contract = TicketNFTModule#TicketNFT
    /// ```
    pub fn format_plan(module: &Module) -> String {
        let mut out = String::new();
        let plural = if module.len() == 1 { "" } else { "s" };
        let _ = writeln!(out, "Module {} ({} action{})", module.name(), module.len(), plural);

        for (number, batch) in module.batches().iter().enumerate() {
            let _ = writeln!(out, "  Batch {}:", number + 1);
            for id in batch {
                let Some(action) = module.action(*id) else {
                    continue;
                };
                let arguments = action
                    .arguments()
                    .iter()
                    .map(|arg| Self::format_argument(module, arg))
                    .join(", ");
                let receiver = action
                    .receiver()
                    .map(|r| format!(" on {}", Self::format_reference(module, r)))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "    {}  {} {}{}({})",
                    action.display_id(module.name()),
                    action.kind(),
                    action.target(),
                    receiver,
                    arguments
                );
            }
        }

        if !module.outputs().is_empty() {
            let _ = writeln!(out, "  Outputs:");
            for (key, future) in module.outputs().iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                let _ = writeln!(out, "    {} = {}", key, Self::format_reference(module, future));
            }
        }
        out
    }

    fn format_argument(module: &Module, argument: &Argument) -> String {
        match argument {
            Argument::Literal(value) => value.to_string(),
            Argument::Reference(future) => Self::format_reference(module, future),
        }
    }

    /// Names an action result by its `Module#label` id instead of its position.
    pub fn format_reference(module: &Module, future: &FutureValue) -> String {
        match future {
            FutureValue::ActionResult { action, index, .. } => {
                match module.action(*action).map(|a| a.display_id(module.name())) {
                    Some(id) if *index == 0 => id,
                    Some(id) => format!("{}.{}", id, index),
                    None => future.to_string(),
                }
            }
            FutureValue::StaticInput { .. } => future.to_string(),
        }
    }
}
