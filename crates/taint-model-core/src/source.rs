// crates/taint-model-core/src/source.rs
// ============================================================================
// Module: Signature Sources
// Description: Providers of discovered function signatures.
// Purpose: Decouple signature discovery from stub generation.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`SignatureSource`] yields the ordered signatures the generator models.
//! Discovery itself (walking a framework routing table) happens upstream; the
//! sources here serve already-materialized signatures.
//!
//! - [`InlineSource`] holds signatures in memory.
//! - [`JsonFileSource`] reads a JSON array of signatures from disk, capped at
//!   [`MAX_SIGNATURE_BYTES`].
//!
//! Signature files are treated as untrusted input and fail closed on size,
//! encoding, or parse errors. Names and types must be non-empty and free of
//! control characters, since each signature renders to exactly one stub line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::signature::FunctionSignature;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a signature file accepted by [`JsonFileSource`].
pub const MAX_SIGNATURE_BYTES: u64 = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while gathering signatures.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error while reading signature input.
    #[error("signature io error: {0}")]
    Io(String),
    /// Signature input could not be parsed.
    #[error("signature parse error: {0}")]
    Parse(String),
    /// Signature input parsed but carries unusable text.
    #[error("invalid signature: {0}")]
    Invalid(String),
    /// Signature input exceeds [`MAX_SIGNATURE_BYTES`].
    #[error("signature input exceeds {limit} bytes")]
    TooLarge {
        /// Configured byte limit.
        limit: u64,
    },
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Supplier of ordered function signatures.
pub trait SignatureSource {
    /// Returns the signatures to model, in discovery order.
    ///
    /// # Errors
    /// Returns [`SourceError`] when signatures cannot be produced.
    fn signatures(&self) -> Result<Vec<FunctionSignature>, SourceError>;
}

impl<T: SignatureSource + ?Sized> SignatureSource for &T {
    fn signatures(&self) -> Result<Vec<FunctionSignature>, SourceError> {
        (**self).signatures()
    }
}

// ============================================================================
// SECTION: Inline Source
// ============================================================================

/// In-memory signature source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSource {
    /// Signatures returned verbatim.
    signatures: Vec<FunctionSignature>,
}

impl InlineSource {
    /// Creates an inline source over `signatures`.
    #[must_use]
    pub const fn new(signatures: Vec<FunctionSignature>) -> Self {
        Self {
            signatures,
        }
    }
}

impl SignatureSource for InlineSource {
    fn signatures(&self) -> Result<Vec<FunctionSignature>, SourceError> {
        Ok(self.signatures.clone())
    }
}

// ============================================================================
// SECTION: JSON File Source
// ============================================================================

/// Signature source backed by a JSON file.
///
/// # Invariants
/// - The file holds a JSON array of [`FunctionSignature`] objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    /// Path to the signature file.
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Returns the signature file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SignatureSource for JsonFileSource {
    fn signatures(&self) -> Result<Vec<FunctionSignature>, SourceError> {
        let bytes = read_signature_bytes(&self.path)?;
        let signatures: Vec<FunctionSignature> =
            serde_json::from_slice(&bytes).map_err(|err| SourceError::Parse(err.to_string()))?;
        for (index, signature) in signatures.iter().enumerate() {
            validate_signature(index, signature)?;
        }
        Ok(signatures)
    }
}

/// Rejects signatures whose text would not render to a single stub line.
fn validate_signature(index: usize, signature: &FunctionSignature) -> Result<(), SourceError> {
    validate_text(index, "qualified_name", &signature.qualified_name)?;
    if let Some(owner) = &signature.owner_class {
        validate_text(index, "owner_class", owner)?;
    }
    for (position, parameter) in signature.parameters.iter().enumerate() {
        validate_text(index, &format!("parameters[{position}].name"), &parameter.name)?;
        if let Some(declared_type) = &parameter.declared_type {
            validate_text(index, &format!("parameters[{position}].declared_type"), declared_type)?;
        }
    }
    if let Some(return_type) = &signature.return_type {
        validate_text(index, "return_type", return_type)?;
    }
    Ok(())
}

/// Requires non-empty text without control characters.
fn validate_text(index: usize, field: &str, value: &str) -> Result<(), SourceError> {
    if value.trim().is_empty() {
        return Err(SourceError::Invalid(format!("signature {index}: {field} must be non-empty")));
    }
    if value.chars().any(char::is_control) {
        return Err(SourceError::Invalid(format!(
            "signature {index}: {field} must not contain control characters"
        )));
    }
    Ok(())
}

/// Reads a signature file with size limits to avoid memory exhaustion.
fn read_signature_bytes(path: &Path) -> Result<Vec<u8>, SourceError> {
    let file = fs::File::open(path).map_err(|err| SourceError::Io(err.to_string()))?;
    let metadata = file.metadata().map_err(|err| SourceError::Io(err.to_string()))?;
    if metadata.len() > MAX_SIGNATURE_BYTES {
        return Err(SourceError::TooLarge {
            limit: MAX_SIGNATURE_BYTES,
        });
    }
    let mut bytes = Vec::new();
    let mut limited = file.take(MAX_SIGNATURE_BYTES + 1);
    limited.read_to_end(&mut bytes).map_err(|err| SourceError::Io(err.to_string()))?;
    let size = u64::try_from(bytes.len()).map_err(|_| SourceError::TooLarge {
        limit: MAX_SIGNATURE_BYTES,
    })?;
    if size > MAX_SIGNATURE_BYTES {
        return Err(SourceError::TooLarge {
            limit: MAX_SIGNATURE_BYTES,
        });
    }
    Ok(bytes)
}
