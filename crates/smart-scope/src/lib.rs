//! # helios-smart-scope - SMART-on-FHIR Scope Parsing
//!
//! This crate parses compact authorization scope strings modeled on
//! [SMART App Launch](https://hl7.org/fhir/smart-app-launch/scopes-and-launch-context.html)
//! scopes into a validated [`Scope`]. It checks syntax and vocabulary only;
//! deciding whether a scope grants a given request is left to the caller.
//!
//! ## Scope Syntax
//!
//! ```text
//! patient/Observation.rs?category=vital-signs
//! ^^^^^^^ ^^^^^^^^^^^ ^^ ^^^^^^^^^^^^^^^^^^^^
//! context  resource   |  params
//!                     operations
//! ```
//!
//! | Segment | Accepted values |
//! |---------|-----------------|
//! | context | `patient`, `user`, `system` |
//! | resource | `*` or a FHIR resource type name |
//! | operations | `*`, `read`, `write`, or letters from `cruds` |
//! | params | `key=value` pairs joined by `&` |
//!
//! ## FHIR Version Support
//!
//! The resource type vocabulary is selected through feature flags:
//!
//! - `R4` - FHIR R4 (4.0.1) - Default
//! - `R5` - FHIR R5 (5.0.0)
//!
//! ## Quick Start
//!
//! ```rust
//! use helios_smart_scope::{Context, Operation, parse};
//!
//! let scope = parse("patient/Observation.rs?param=true&anotha=1")?;
//! assert_eq!(scope.context(), Context::Patient);
//! assert_eq!(scope.resource(), "Observation");
//! assert!(scope.allows(Operation::Search));
//! assert_eq!(scope.params().len(), 2);
//! # Ok::<(), helios_smart_scope::ScopeError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod fhir_types;
pub mod parser;
pub mod scope;

pub use config::CliConfig;
pub use error::{ScopeError, ScopeResult};
pub use parser::parse;
pub use scope::{Context, Operation, Scope, WILDCARD};

/// Serializes a scope to the JSON printed by the `fhirscope` binary.
pub fn render_scope(scope: &Scope, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(scope)
    } else {
        serde_json::to_string(scope)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Log output goes to stderr so it never mixes with the JSON on stdout.
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("helios_smart_scope={},fhirscope={}", level, level))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
