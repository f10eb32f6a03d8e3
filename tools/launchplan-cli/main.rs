use clap::Parser;
use launchplan::definition::exchange_document;
use launchplan::prelude::*;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Builds a deployment module from a declarative definition and prints its plan
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the module definition JSON file
    definition_path: String,

    /// Path to the inputs JSON file (accounts and parameters)
    #[arg(short, long)]
    inputs: Option<String>,

    /// Path to an entity catalog JSON file to check targets against
    #[arg(short, long)]
    catalog: Option<String>,

    /// Print the engine exchange document as JSON instead of the plan
    #[arg(long)]
    json: bool,

    /// Write the module as a binary artifact to this path
    #[arg(short, long)]
    out: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();

    run(cli);
}

fn run(cli: Cli) {
    let start = Instant::now();

    // --- 1. Configuration ---
    let inputs = match &cli.inputs {
        Some(path) => StaticInputs::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load inputs: {}", e))),
        None => {
            warn!("no inputs file provided; no accounts or parameters are available");
            StaticInputs::default()
        }
    };
    let definition = ModuleDefinition::from_file(&cli.definition_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load definition: {}", e)));

    // --- 2. Graph construction ---
    let mut namespace = Namespace::new();
    let module = definition
        .build(&inputs, &mut namespace)
        .unwrap_or_else(|e| exit_with_error(&format!("Module construction failed: {}", e)));
    debug!(module = module.name(), elapsed = ?start.elapsed(), "module built");

    // --- 3. Target check ---
    if let Some(catalog_path) = &cli.catalog {
        let catalog = StaticCatalog::from_file(catalog_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)));
        let unresolved = module.unresolved_targets(&catalog);
        if !unresolved.is_empty() {
            for action in &unresolved {
                eprintln!(
                    "Unknown target '{}' in {}",
                    action.target(),
                    action.display_id(module.name())
                );
            }
            exit_with_error(&format!("{} target(s) not found in catalog", unresolved.len()));
        }
    }

    // --- 4. Output ---
    if cli.json {
        let document = exchange_document(&module);
        match serde_json::to_string_pretty(&document) {
            Ok(text) => println!("{}", text),
            Err(e) => exit_with_error(&format!("Failed to render JSON: {}", e)),
        }
    } else {
        print!("{}", PlanFormatter::format_plan(&module));
    }

    if let Some(out_path) = &cli.out {
        ModuleArtifact::new(module)
            .save(out_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        eprintln!("Artifact written to {}", out_path);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
