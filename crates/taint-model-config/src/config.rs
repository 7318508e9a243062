// crates/taint-model-config/src/config.rs
// ============================================================================
// Module: Taint Model Configuration
// Description: Configuration loading and validation for the stub generator.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: taint-model-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every table is optional; omitted tables fall back to the generator
//! defaults. Unknown keys are rejected so typos never silently change which
//! parameters get annotated.
//!
//! Path values (`signatures.path`, `output.path`) are used as written, so
//! relative paths resolve against the working directory of the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use taint_model_core::AnnotationSpecification;
use taint_model_core::DEFAULT_TAINT_ANNOTATION;
use taint_model_core::GeneratorConfig;
use taint_model_core::ModelOrder;
use taint_model_core::WhitelistSpecification;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "taint-models.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TAINT_MODEL_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single annotation text.
pub(crate) const MAX_ANNOTATION_LENGTH: usize = 1024;
/// Maximum number of entries in any whitelist.
pub(crate) const MAX_WHITELIST_ENTRIES: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Taint model generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaintModelConfig {
    /// Generator settings.
    #[serde(default)]
    pub generator: GeneratorSettings,
    /// Signature input settings.
    #[serde(default)]
    pub signatures: SignaturesConfig,
    /// Model file output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl TaintModelConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = read_config_bytes(&resolved)?;
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bytes exceed limits, are not UTF-8,
    /// fail to parse, or fail validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.signatures.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Converts the generator settings into a core [`GeneratorConfig`].
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        self.generator.to_generator_config()
    }
}

/// `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Default annotation text for annotated parameters.
    #[serde(default = "default_taint_annotation")]
    pub taint_annotation: String,
    /// Legacy class whitelist.
    #[serde(default)]
    pub whitelisted_classes: BTreeSet<String>,
    /// Fully-qualified view names to skip.
    #[serde(default)]
    pub whitelisted_views: BTreeSet<String>,
    /// Explicit per-kind annotation overrides.
    #[serde(default)]
    pub annotations: Option<AnnotationSpecification>,
    /// Explicit parameter whitelist.
    #[serde(default)]
    pub whitelisted_parameters: Option<WhitelistSpecification>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            taint_annotation: default_taint_annotation(),
            whitelisted_classes: BTreeSet::new(),
            whitelisted_views: BTreeSet::new(),
            annotations: None,
            whitelisted_parameters: None,
        }
    }
}

impl GeneratorSettings {
    /// Validates generator settings.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_annotation_text("generator.taint_annotation", &self.taint_annotation)?;
        validate_entries("generator.whitelisted_classes", &self.whitelisted_classes)?;
        validate_entries("generator.whitelisted_views", &self.whitelisted_views)?;
        if let Some(annotations) = &self.annotations {
            let fields = [
                ("generator.annotations.arg", &annotations.arg),
                ("generator.annotations.vararg", &annotations.vararg),
                ("generator.annotations.kwarg", &annotations.kwarg),
                ("generator.annotations.returns", &annotations.returns),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    validate_annotation_text(field, value)?;
                }
            }
        }
        if let Some(whitelist) = &self.whitelisted_parameters {
            validate_entries(
                "generator.whitelisted_parameters.parameter_name",
                &whitelist.parameter_name,
            )?;
            validate_entries(
                "generator.whitelisted_parameters.parameter_type",
                &whitelist.parameter_type,
            )?;
        }
        Ok(())
    }

    /// Builds the core generator configuration.
    fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            taint_annotation: self.taint_annotation.clone(),
            whitelisted_classes: self.whitelisted_classes.clone(),
            whitelisted_views: self.whitelisted_views.clone(),
            annotations: self.annotations.clone(),
            whitelisted_parameters: self.whitelisted_parameters.clone(),
        }
    }
}

/// `[signatures]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignaturesConfig {
    /// Path to the JSON signature file.
    #[serde(default)]
    pub path: Option<String>,
}

impl SignaturesConfig {
    /// Validates signature settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("signatures.path", path)?;
        }
        Ok(())
    }

    /// Returns the configured signature path, if any.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|path| PathBuf::from(path.trim()))
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the model file; stdout when absent.
    #[serde(default)]
    pub path: Option<String>,
    /// Ordering of stubs in the model file.
    #[serde(default)]
    pub order: ModelOrder,
}

impl OutputConfig {
    /// Validates output settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("output.path", path)?;
        }
        Ok(())
    }

    /// Returns the configured output path, if any.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(|path| PathBuf::from(path.trim()))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serde default for `generator.taint_annotation`.
fn default_taint_annotation() -> String {
    DEFAULT_TAINT_ANNOTATION.to_string()
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Reads at most one byte past [`MAX_CONFIG_FILE_SIZE`] so oversized files
/// are rejected by [`TaintModelConfig::from_bytes`] without being buffered.
fn read_config_bytes(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let file = fs::File::open(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    let limit = u64::try_from(MAX_CONFIG_FILE_SIZE)
        .map_err(|_| ConfigError::Invalid("config file exceeds size limit".to_string()))?;
    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|err| ConfigError::Io(err.to_string()))?;
    Ok(bytes)
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates annotation text; stubs are line-oriented so text must fit on one line.
fn validate_annotation_text(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.contains(['\n', '\r']) {
        return Err(ConfigError::Invalid(format!("{field} must be a single line")));
    }
    if value.len() > MAX_ANNOTATION_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Validates whitelist entries.
fn validate_entries(field: &str, entries: &BTreeSet<String>) -> Result<(), ConfigError> {
    if entries.len() > MAX_WHITELIST_ENTRIES {
        return Err(ConfigError::Invalid(format!("{field} has too many entries")));
    }
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!("{field} entries must be non-empty")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
