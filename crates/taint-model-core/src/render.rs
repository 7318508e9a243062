// crates/taint-model-core/src/render.rs
// ============================================================================
// Module: Stub Rendering
// Description: Renders model stubs from decided parameter annotations.
// Purpose: Own the stub grammar in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The renderer turns an already-decided parameter list into stub text:
//!
//! ```text
//! def <qualified-name>(<param>, <param>, ...)[ -> <type>]: ...
//! ```
//!
//! where each `<param>` is `name`, `*name`, or `**name`, optionally followed by
//! `: <annotation>`. Annotation decisions are made by the generator; this
//! module only formats.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::signature::ParameterKind;

// ============================================================================
// SECTION: Model Stub
// ============================================================================

/// A rendered taint model stub.
///
/// # Invariants
/// - The text is a single line matching the stub grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelStub(String);

impl ModelStub {
    /// Returns the stub text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelStub {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for ModelStub {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// A parameter with its rendering decision applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedParameter<'a> {
    /// Parameter name without prefix.
    pub name: &'a str,
    /// Parameter kind, which selects the `*`/`**` prefix.
    pub kind: ParameterKind,
    /// Annotation text, or `None` to render the parameter bare.
    pub annotation: Option<&'a str>,
}

impl fmt::Display for RenderedParameter<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.kind.prefix())?;
        formatter.write_str(self.name)?;
        if let Some(annotation) = self.annotation {
            formatter.write_str(": ")?;
            formatter.write_str(annotation)?;
        }
        Ok(())
    }
}

/// Renders a stub for `qualified_name` from decided parameters.
#[must_use]
pub fn render_stub(
    qualified_name: &str,
    parameters: &[RenderedParameter<'_>],
    returns: Option<&str>,
) -> ModelStub {
    let mut out = String::with_capacity(qualified_name.len() + 16);
    out.push_str("def ");
    out.push_str(qualified_name);
    out.push('(');
    for (index, parameter) in parameters.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.to_string());
    }
    out.push(')');
    if let Some(returns) = returns {
        out.push_str(" -> ");
        out.push_str(returns);
    }
    out.push_str(": ...");
    ModelStub(out)
}
