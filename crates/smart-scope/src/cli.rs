//! fhirscope
//!
//! Parses a single SMART-on-FHIR scope given on the command line and prints
//! it as JSON.

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use helios_smart_scope::{CliConfig, fhir_types, init_logging, parse, render_scope};
use tracing::debug;

/// Parses the configured scope and renders it for stdout.
fn run(config: &CliConfig) -> anyhow::Result<String> {
    let scope = parse(&config.scope).inspect_err(|e| {
        debug!(scope = %config.scope, error = %e, "Rejected scope");
    })?;

    debug!(
        context = %scope.context(),
        resource = %scope.resource(),
        operations = %scope.operation_codes(),
        params = scope.params().len(),
        "Parsed scope"
    );

    render_scope(&scope, config.pretty).context("failed to serialize scope")
}

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // The log level is only handed to the subscriber once it is known good
    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        return ExitCode::FAILURE;
    }

    init_logging(&config.log_level);

    debug!(fhir_version = fhir_types::fhir_version(), "Starting fhirscope");

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
