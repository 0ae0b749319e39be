//! The parsed scope record and its closed vocabularies.
//!
//! A [`Scope`] is only ever produced by [`parse`](crate::parse), so holding
//! one means every field already passed validation. Fields are private and
//! exposed through read-only accessors.
//!
//! # Serialization
//!
//! `Scope` serializes to the shape printed by the `fhirscope` binary:
//!
//! ```json
//! {"context":"patient","operations":["r","s"],"resource":"Observation","params":{"param":"true"}}
//! ```
//!
//! `params` is left out entirely when the scope carries no query parameters.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ScopeError, ScopeResult};

/// Resource segment value that matches every resource type.
pub const WILDCARD: &str = "*";

/// The actor category a scope applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Access on behalf of the patient in the launch context.
    Patient,
    /// Access on behalf of the authenticated user.
    User,
    /// Backend service access with no user in the loop.
    System,
}

impl Context {
    /// Every context, in declaration order.
    pub const ALL: [Context; 3] = [Context::Patient, Context::User, Context::System];

    /// Returns the name used in scope strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Patient => "patient",
            Context::User => "user",
            Context::System => "system",
        }
    }
}

impl FromStr for Context {
    type Err = ScopeError;

    /// Matches case-sensitively against `patient`, `user` and `system`.
    fn from_str(s: &str) -> ScopeResult<Self> {
        match s {
            "patient" => Ok(Context::Patient),
            "user" => Ok(Context::User),
            "system" => Ok(Context::System),
            other => Err(ScopeError::InvalidContext(other.to_string())),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action a scope permits on its resource.
///
/// Variants are declared in canonical order, so `Ord` sorts
/// create, read, update, delete, search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Operation {
    /// Create a new resource (`c`).
    #[serde(rename = "c")]
    Create,
    /// Read a resource by id (`r`).
    #[serde(rename = "r")]
    Read,
    /// Update an existing resource (`u`).
    #[serde(rename = "u")]
    Update,
    /// Delete a resource (`d`).
    #[serde(rename = "d")]
    Delete,
    /// Search for resources (`s`).
    #[serde(rename = "s")]
    Search,
}

impl Operation {
    /// Every operation, in canonical order.
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
        Operation::Search,
    ];

    /// Maps a single-letter code to its operation.
    pub fn from_code(code: char) -> Option<Operation> {
        match code {
            'c' => Some(Operation::Create),
            'r' => Some(Operation::Read),
            'u' => Some(Operation::Update),
            'd' => Some(Operation::Delete),
            's' => Some(Operation::Search),
            _ => None,
        }
    }

    /// Returns the single-letter code.
    pub fn code(&self) -> char {
        match self {
            Operation::Create => 'c',
            Operation::Read => 'r',
            Operation::Update => 'u',
            Operation::Delete => 'd',
            Operation::Search => 's',
        }
    }

    /// Returns the lowercase operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Search => "search",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validated scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    context: Context,
    operations: Vec<Operation>,
    resource: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<String, String>,
}

impl Scope {
    /// Assembles a scope from already validated parts.
    pub(crate) fn from_parts(
        context: Context,
        resource: String,
        operations: Vec<Operation>,
        params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            context,
            operations,
            resource,
            params,
        }
    }

    /// The actor category.
    pub fn context(&self) -> Context {
        self.context
    }

    /// The resource type name, or [`WILDCARD`].
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Permitted operations in parse order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Query parameters attached after `?`.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Returns `true` if the scope applies to every resource type.
    pub fn is_wildcard_resource(&self) -> bool {
        self.resource == WILDCARD
    }

    /// Returns `true` if the scope permits `operation`.
    pub fn allows(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    /// Returns the operations as a string of codes, e.g. `"rs"`.
    pub fn operation_codes(&self) -> String {
        self.operations.iter().map(Operation::code).collect()
    }
}

impl fmt::Display for Scope {
    /// Writes the canonical form `context/resource.codes[?k=v&...]`.
    ///
    /// Shorthand operation specs are written out as codes, so
    /// `user/Observation.read` renders as `user/Observation.rs`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}.{}",
            self.context,
            self.resource,
            self.operation_codes()
        )?;

        let mut separator = '?';
        for (key, value) in &self.params {
            write!(f, "{}{}={}", separator, key, value)?;
            separator = '&';
        }

        Ok(())
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> ScopeResult<Self> {
        crate::parser::parse(s)
    }
}
