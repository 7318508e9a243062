// crates/taint-model-core/src/lib.rs
// ============================================================================
// Module: Taint Model Core Library
// Description: Signature model, specifications, and taint stub generation.
// Purpose: Turn discovered view signatures into byte-stable taint model stubs.
// Dependencies: serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! `taint-model-core` renders taint model stubs for a downstream static taint
//! analyzer. Each stub is a body-less Python-style declaration such as
//! `def app.views.login(request: TaintSource[UserControlled]): ...` whose
//! annotations mark parameters as untrusted sources.
//!
//! The [`RestApiSourceGenerator`] decides per parameter whether to annotate it
//! and with which text, combining view exclusion, name/type whitelists, the
//! legacy class whitelist, and an optional [`AnnotationSpecification`].
//!
//! Invariants:
//! - Output order mirrors input order, minus excluded views.
//! - Rendering is deterministic for a fixed configuration and input.
//! - [`RestApiSourceGenerator::compute_models`] never fails.
//!
//! ## Index
//! - Data model: [`FunctionSignature`], [`Parameter`], [`ParameterKind`]
//! - Configuration: [`GeneratorConfig`], [`AnnotationSpecification`], [`WhitelistSpecification`]
//! - Generation: [`RestApiSourceGenerator`], [`ModelStub`]
//! - Sources: [`SignatureSource`], [`InlineSource`], [`JsonFileSource`]
//! - Output: [`render_model_file`], [`ModelOrder`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod generator;
pub mod output;
pub mod render;
pub mod signature;
pub mod source;
pub mod specification;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use generator::DEFAULT_TAINT_ANNOTATION;
pub use generator::GeneratorConfig;
pub use generator::RestApiSourceGenerator;
pub use output::ModelOrder;
pub use output::render_model_file;
pub use render::ModelStub;
pub use render::RenderedParameter;
pub use render::render_stub;
pub use signature::FunctionSignature;
pub use signature::Parameter;
pub use signature::ParameterKind;
pub use source::InlineSource;
pub use source::JsonFileSource;
pub use source::MAX_SIGNATURE_BYTES;
pub use source::SignatureSource;
pub use source::SourceError;
pub use specification::AnnotationSpecification;
pub use specification::ResolvedAnnotations;
pub use specification::WhitelistSpecification;
