// crates/taint-model-core/src/signature.rs
// ============================================================================
// Module: Function Signatures
// Description: Data model for discovered view functions and their parameters.
// Purpose: Provide the input shape consumed by the stub generator.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Signatures are produced by an external discovery step (for example a web
//! framework's routing table) and consumed as-is by the generator.
//!
//! The discovery step is responsible for well-formed input: parameter names
//! are unique, and at most one [`ParameterKind::Vararg`] and one
//! [`ParameterKind::Kwarg`] parameter exist, both trailing. The generator does
//! not re-check these preconditions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// Parameter kind as it appears in a Python-style signature.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Ordinary positional or keyword parameter (`name`).
    #[default]
    Positional,
    /// Variadic positional parameter (`*name`).
    Vararg,
    /// Variadic keyword parameter (`**name`).
    Kwarg,
}

impl ParameterKind {
    /// Returns the rendering prefix for the kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Positional => "",
            Self::Vararg => "*",
            Self::Kwarg => "**",
        }
    }
}

/// A single declared parameter.
///
/// # Invariants
/// - `name` is unique within its [`FunctionSignature`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// Parameter name without any `*` prefix.
    pub name: String,
    /// Parameter kind.
    #[serde(default)]
    pub kind: ParameterKind,
    /// Declared type annotation, when the source declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
}

impl Parameter {
    /// Creates an untyped positional parameter.
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Positional,
            declared_type: None,
        }
    }

    /// Creates an untyped `*args`-style parameter.
    pub fn vararg(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Vararg,
            declared_type: None,
        }
    }

    /// Creates an untyped `**kwargs`-style parameter.
    pub fn kwarg(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Kwarg,
            declared_type: None,
        }
    }

    /// Returns the parameter with a declared type.
    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }
}

// ============================================================================
// SECTION: Signatures
// ============================================================================

/// A discovered function or method signature.
///
/// # Invariants
/// - `qualified_name` is the full dotted path, including the owner class for methods.
/// - `parameters` preserve declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionSignature {
    /// Fully dotted path (module, optional class, function name).
    pub qualified_name: String,
    /// Owning class name for methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_class: Option<String>,
    /// Ordered parameter list.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared return type; carried for completeness, not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl FunctionSignature {
    /// Creates a free-function signature.
    pub fn function(qualified_name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            owner_class: None,
            parameters,
            return_type: None,
        }
    }

    /// Creates a method signature owned by `owner_class`.
    pub fn method(
        qualified_name: impl Into<String>,
        owner_class: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            owner_class: Some(owner_class.into()),
            parameters,
            return_type: None,
        }
    }

    /// Returns the signature with a declared return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Returns true when the signature belongs to a class.
    #[must_use]
    pub const fn is_method(&self) -> bool {
        self.owner_class.is_some()
    }
}
