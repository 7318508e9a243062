// crates/taint-model-core/src/generator.rs
// ============================================================================
// Module: REST API Source Generator
// Description: Decides per-parameter taint annotations and renders stubs.
// Purpose: Compose view exclusion, whitelists, and annotation overrides.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! [`RestApiSourceGenerator`] marks the parameters of discovered REST views as
//! taint sources. Per signature it applies, in order:
//!
//! 1. View exclusion: names in [`GeneratorConfig::whitelisted_views`] emit nothing.
//! 2. Owner-class override: when a method's owner class is listed in
//!    [`GeneratorConfig::whitelisted_classes`], its first parameter is annotated
//!    with the `arg` text even if the whitelist would exempt it.
//! 3. Whitelist exclusion: a parameter matching the effective whitelist by name
//!    or by declared type is rendered bare.
//! 4. Everything else gets the annotation text for its kind.
//!
//! The effective whitelist is fixed at construction:
//! - the explicit [`WhitelistSpecification`] when one is configured;
//! - otherwise, if `whitelisted_classes` is non-empty, a type whitelist made of
//!   those classes (legacy configuration);
//! - otherwise a name whitelist containing only `self`.
//!
//! Annotation text never affects whether a parameter is annotated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use tracing::debug;
use tracing::info;

use crate::render::ModelStub;
use crate::render::RenderedParameter;
use crate::render::render_stub;
use crate::signature::FunctionSignature;
use crate::signature::Parameter;
use crate::source::SignatureSource;
use crate::source::SourceError;
use crate::specification::AnnotationSpecification;
use crate::specification::ResolvedAnnotations;
use crate::specification::WhitelistSpecification;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default taint annotation applied to request parameters.
pub const DEFAULT_TAINT_ANNOTATION: &str = "TaintSource[UserControlled]";

/// Receiver name exempt from annotation when no whitelist is configured.
const RECEIVER_NAME: &str = "self";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Generator configuration.
///
/// # Invariants
/// - Values are read-only once handed to [`RestApiSourceGenerator::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Default annotation text.
    pub taint_annotation: String,
    /// Legacy class whitelist.
    pub whitelisted_classes: BTreeSet<String>,
    /// Fully-qualified view names dropped from output.
    pub whitelisted_views: BTreeSet<String>,
    /// Explicit annotation overrides.
    pub annotations: Option<AnnotationSpecification>,
    /// Explicit parameter whitelist.
    pub whitelisted_parameters: Option<WhitelistSpecification>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            taint_annotation: DEFAULT_TAINT_ANNOTATION.to_string(),
            whitelisted_classes: BTreeSet::new(),
            whitelisted_views: BTreeSet::new(),
            annotations: None,
            whitelisted_parameters: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the given default annotation.
    pub fn with_taint_annotation(taint_annotation: impl Into<String>) -> Self {
        Self {
            taint_annotation: taint_annotation.into(),
            ..Self::default()
        }
    }

    /// Returns the annotation text after defaulting.
    #[must_use]
    pub fn resolved_annotations(&self) -> ResolvedAnnotations {
        self.annotations.as_ref().map_or_else(
            || ResolvedAnnotations::uniform(&self.taint_annotation),
            |annotations| annotations.resolve(&self.taint_annotation),
        )
    }

    /// Returns the whitelist applied to ordinary parameters.
    #[must_use]
    pub fn effective_whitelist(&self) -> WhitelistSpecification {
        if let Some(whitelist) = &self.whitelisted_parameters {
            return whitelist.clone();
        }
        if self.whitelisted_classes.is_empty() {
            WhitelistSpecification::new([RECEIVER_NAME], std::iter::empty::<String>())
        } else {
            WhitelistSpecification {
                parameter_name: BTreeSet::new(),
                parameter_type: self.whitelisted_classes.clone(),
            }
        }
    }
}

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Taint stub generator for REST API view functions.
///
/// # Invariants
/// - Configuration is resolved once at construction and never mutated.
/// - [`Self::compute_models`] is a pure function of its input and the configuration.
#[derive(Debug, Clone)]
pub struct RestApiSourceGenerator<S> {
    /// Source used by [`Self::generate_models`].
    source: S,
    /// Configuration as supplied.
    config: GeneratorConfig,
    /// Annotation text after defaulting.
    annotations: ResolvedAnnotations,
    /// Whitelist applied to ordinary parameters.
    whitelist: WhitelistSpecification,
}

impl<S> RestApiSourceGenerator<S> {
    /// Creates a generator over `source` with `config`.
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        let annotations = config.resolved_annotations();
        let whitelist = config.effective_whitelist();
        Self {
            source,
            config,
            annotations,
            whitelist,
        }
    }

    /// Renders one stub per retained signature, preserving input order.
    #[must_use]
    pub fn compute_models(&self, signatures: &[FunctionSignature]) -> Vec<ModelStub> {
        let mut models = Vec::with_capacity(signatures.len());
        for signature in signatures {
            if self.config.whitelisted_views.contains(&signature.qualified_name) {
                debug!(view = %signature.qualified_name, "skipping whitelisted view");
                continue;
            }
            let model = self.model_for(signature);
            debug!(view = %signature.qualified_name, model = %model, "rendered model");
            models.push(model);
        }
        models
    }

    /// Renders the stub for a single retained signature.
    fn model_for(&self, signature: &FunctionSignature) -> ModelStub {
        let receiver_is_source = signature
            .owner_class
            .as_ref()
            .is_some_and(|owner| self.config.whitelisted_classes.contains(owner));
        let parameters: Vec<RenderedParameter<'_>> = signature
            .parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                let annotation = if index == 0 && receiver_is_source {
                    Some(self.annotations.arg.as_str())
                } else {
                    self.annotation_for(parameter)
                };
                RenderedParameter {
                    name: &parameter.name,
                    kind: parameter.kind,
                    annotation,
                }
            })
            .collect();
        render_stub(&signature.qualified_name, &parameters, self.annotations.returns.as_deref())
    }

    /// Returns the annotation for an ordinary parameter, or `None` when exempt.
    fn annotation_for(&self, parameter: &Parameter) -> Option<&str> {
        if self.whitelist.excludes(parameter) {
            None
        } else {
            Some(self.annotations.for_kind(parameter.kind))
        }
    }
}

impl<S: SignatureSource> RestApiSourceGenerator<S> {
    /// Gathers signatures from the source and renders their stubs.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the source cannot produce signatures.
    pub fn generate_models(&self) -> Result<Vec<ModelStub>, SourceError> {
        let signatures = self.source.signatures()?;
        let models = self.compute_models(&signatures);
        info!(
            signatures = signatures.len(),
            models = models.len(),
            "generated REST API source models"
        );
        Ok(models)
    }
}
