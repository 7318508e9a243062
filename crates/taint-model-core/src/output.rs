// crates/taint-model-core/src/output.rs
// ============================================================================
// Module: Model File Output
// Description: Assembles rendered stubs into model file content.
// Purpose: Provide a deterministic on-disk layout for generated models.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A model file holds one stub per line with a trailing newline. Stubs either
//! keep generator order or are sorted and deduplicated, which matches the
//! layout analyzers traditionally load generated models from.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::render::ModelStub;

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Line ordering for model files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelOrder {
    /// Keep generator order, duplicates included.
    #[default]
    Input,
    /// Sort lexicographically and drop duplicate stubs.
    Sorted,
}

impl ModelOrder {
    /// Returns the stable label for the ordering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Sorted => "sorted",
        }
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Joins stubs into model file content.
///
/// Returns an empty string when there are no stubs.
#[must_use]
pub fn render_model_file(models: &[ModelStub], order: ModelOrder) -> String {
    let lines: Vec<&str> = match order {
        ModelOrder::Input => models.iter().map(ModelStub::as_str).collect(),
        ModelOrder::Sorted => {
            models.iter().map(ModelStub::as_str).collect::<BTreeSet<_>>().into_iter().collect()
        }
    };
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
