// crates/taint-model-config/src/lib.rs
// ============================================================================
// Module: Taint Model Config Library
// Description: Canonical config model and validation for the stub generator.
// Purpose: Single source of truth for taint-models.toml semantics.
// Dependencies: taint-model-core, serde, toml
// ============================================================================

//! ## Overview
//! `taint-model-config` defines the TOML configuration consumed by the
//! `taint-model-gen` binary. Loading is strict and fail-closed: oversized,
//! non-UTF-8, or unknown-field documents are rejected before any generator
//! runs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
