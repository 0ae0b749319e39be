//! Scope string parser.
//!
//! Parses strings of the form
//!
//! ```text
//! context "/" resource "." operation-spec ["?" query]
//! ```
//!
//! into a [`Scope`]. Validation is a straight pipeline: each stage either
//! hands its remainder to the next or returns the first error it finds.
//!
//! # Operation specs
//!
//! | Spec | Operations |
//! |------|------------|
//! | `*` | create, read, update, delete, search |
//! | `read` | read, search |
//! | `write` | create, update, delete |
//! | letters from `cruds` | one per letter, in input order, no repeats |

use std::collections::{BTreeMap, HashSet};

use crate::error::{ScopeError, ScopeResult};
use crate::fhir_types::is_valid_resource_type;
use crate::scope::{Context, Operation, Scope, WILDCARD};

const READ_OPERATIONS: [Operation; 2] = [Operation::Read, Operation::Search];

const WRITE_OPERATIONS: [Operation; 3] =
    [Operation::Create, Operation::Update, Operation::Delete];

/// Parses and validates a scope string.
///
/// # Example
///
/// ```rust
/// use helios_smart_scope::{Context, Operation, parse};
///
/// let scope = parse("user/Observation.read?foo=bar").unwrap();
/// assert_eq!(scope.context(), Context::User);
/// assert_eq!(scope.resource(), "Observation");
/// assert_eq!(scope.operations(), &[Operation::Read, Operation::Search]);
/// assert_eq!(scope.params()["foo"], "bar");
/// ```
pub fn parse(input: &str) -> ScopeResult<Scope> {
    let (context, rest) = input
        .split_once('/')
        .ok_or_else(|| ScopeError::MalformedScope(input.to_string()))?;

    let context: Context = context.parse()?;

    let (resource, rest) = rest
        .split_once('.')
        .ok_or_else(|| ScopeError::MalformedResourceOrOperation(rest.to_string()))?;

    let resource = parse_resource(resource)?;

    let (operation_spec, query) = match rest.split_once('?') {
        Some((spec, query)) => (spec, Some(query)),
        None => (rest, None),
    };

    let operations = parse_operations(operation_spec)?;
    let params = match query {
        Some(query) => parse_params(query)?,
        None => BTreeMap::new(),
    };

    Ok(Scope::from_parts(context, resource, operations, params))
}

fn parse_resource(resource: &str) -> ScopeResult<String> {
    if resource == WILDCARD || is_valid_resource_type(resource) {
        Ok(resource.to_string())
    } else {
        Err(ScopeError::InvalidResource(resource.to_string()))
    }
}

/// Resolves an operation spec. Shorthands are fixed expansions and skip the
/// duplicate check applied to explicit letters.
fn parse_operations(spec: &str) -> ScopeResult<Vec<Operation>> {
    match spec {
        WILDCARD => Ok(Operation::ALL.to_vec()),
        "read" => Ok(READ_OPERATIONS.to_vec()),
        "write" => Ok(WRITE_OPERATIONS.to_vec()),
        "" => Err(ScopeError::InvalidOperation(String::new())),
        codes => parse_operation_codes(codes),
    }
}

fn parse_operation_codes(codes: &str) -> ScopeResult<Vec<Operation>> {
    let mut operations = Vec::with_capacity(codes.len());
    let mut seen = HashSet::new();

    for code in codes.chars() {
        let operation = Operation::from_code(code)
            .ok_or_else(|| ScopeError::InvalidOperation(code.to_string()))?;

        if !seen.insert(operation) {
            return Err(ScopeError::DuplicateOperation(code.to_string()));
        }
        operations.push(operation);
    }

    Ok(operations)
}

/// Parses `k=v&k=v`. Repeated keys keep the last value.
fn parse_params(query: &str) -> ScopeResult<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    for pair in query.split('&') {
        let mut parts = pair.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                params.insert(key.to_string(), value.to_string());
            }
            _ => return Err(ScopeError::InvalidParam(pair.to_string())),
        }
    }

    Ok(params)
}
