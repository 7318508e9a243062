// crates/taint-model-core/src/specification.rs
// ============================================================================
// Module: Generator Specifications
// Description: Annotation text overrides and parameter whitelists.
// Purpose: Provide explicit configuration values with documented defaults.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`AnnotationSpecification`] chooses the annotation text applied to each
//! parameter kind and to the return type. [`WhitelistSpecification`] names the
//! parameters exempt from annotation, by name or by declared type.
//!
//! Both types are plain values: construction never fails and defaulting is
//! resolved once, when the generator is built, rather than at render time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::signature::Parameter;
use crate::signature::ParameterKind;

// ============================================================================
// SECTION: Annotation Specification
// ============================================================================

/// Annotation text overrides.
///
/// # Invariants
/// - Unset `arg`, `vararg`, and `kwarg` resolve to the generator's taint annotation.
/// - Unset `returns` means no return clause is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationSpecification {
    /// Annotation for positional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Annotation for `*args` parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vararg: Option<String>,
    /// Annotation for `**kwargs` parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwarg: Option<String>,
    /// Return annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl AnnotationSpecification {
    /// Sets the positional parameter annotation.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    /// Sets the `*args` annotation.
    #[must_use]
    pub fn with_vararg(mut self, vararg: impl Into<String>) -> Self {
        self.vararg = Some(vararg.into());
        self
    }

    /// Sets the `**kwargs` annotation.
    #[must_use]
    pub fn with_kwarg(mut self, kwarg: impl Into<String>) -> Self {
        self.kwarg = Some(kwarg.into());
        self
    }

    /// Sets the return annotation.
    #[must_use]
    pub fn with_returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    /// Resolves unset parameter annotations to `taint_annotation`.
    #[must_use]
    pub fn resolve(&self, taint_annotation: &str) -> ResolvedAnnotations {
        let or_default = |value: Option<&str>| value.unwrap_or(taint_annotation).to_string();
        ResolvedAnnotations {
            arg: or_default(self.arg.as_deref()),
            vararg: or_default(self.vararg.as_deref()),
            kwarg: or_default(self.kwarg.as_deref()),
            returns: self.returns.clone(),
        }
    }
}

/// Effective annotation text after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnnotations {
    /// Text for positional parameters.
    pub arg: String,
    /// Text for `*args` parameters.
    pub vararg: String,
    /// Text for `**kwargs` parameters.
    pub kwarg: String,
    /// Return annotation, when one is rendered.
    pub returns: Option<String>,
}

impl ResolvedAnnotations {
    /// Annotates every parameter kind with `taint_annotation` and omits the return clause.
    #[must_use]
    pub fn uniform(taint_annotation: &str) -> Self {
        AnnotationSpecification::default().resolve(taint_annotation)
    }

    /// Returns the text applied to a parameter of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: ParameterKind) -> &str {
        match kind {
            ParameterKind::Positional => &self.arg,
            ParameterKind::Vararg => &self.vararg,
            ParameterKind::Kwarg => &self.kwarg,
        }
    }
}

// ============================================================================
// SECTION: Whitelist Specification
// ============================================================================

/// Parameters exempt from annotation.
///
/// # Invariants
/// - The default value exempts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhitelistSpecification {
    /// Parameter names exempt regardless of type.
    #[serde(default)]
    pub parameter_name: BTreeSet<String>,
    /// Declared types exempt regardless of name.
    #[serde(default)]
    pub parameter_type: BTreeSet<String>,
}

impl WhitelistSpecification {
    /// Builds a whitelist from name and type lists.
    pub fn new<N, T>(names: N, types: T) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            parameter_name: names.into_iter().map(Into::into).collect(),
            parameter_type: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when the parameter is exempt by name or by declared type.
    #[must_use]
    pub fn excludes(&self, parameter: &Parameter) -> bool {
        self.parameter_name.contains(&parameter.name)
            || parameter
                .declared_type
                .as_ref()
                .is_some_and(|declared| self.parameter_type.contains(declared))
    }
}
