//! Config load validation tests for taint-model-config.
// crates/taint-model-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

#![allow(clippy::use_debug, reason = "Test diagnostics may print debug values.")]

use std::io::Write;
use std::path::Path;

use taint_model_config::ConfigError;
use taint_model_config::MAX_CONFIG_FILE_SIZE;
use taint_model_config::TaintModelConfig;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<TaintModelConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(contents: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(TaintModelConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(TaintModelConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let payload = vec![b'#'; MAX_CONFIG_FILE_SIZE + 1];
    let file = write_config(&payload)?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_stops_reading_past_size_limit() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("huge.toml");
    let file = std::fs::File::create(&path).map_err(|err| err.to_string())?;
    let huge = u64::try_from(MAX_CONFIG_FILE_SIZE * 64).map_err(|err| err.to_string())?;
    file.set_len(huge).map_err(|err| err.to_string())?;
    assert_invalid(TaintModelConfig::load(Some(&path)), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let file = write_config(&[0xFF, 0xFE, 0xFF])?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_reports_missing_file_as_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let result = TaintModelConfig::load(Some(&dir.path().join("absent.toml")));
    match result {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let file = write_config(b"[generator\ntaint_annotation = ")?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_tables_and_keys() -> TestResult {
    let file = write_config(b"[server]\nbind = \"127.0.0.1\"\n")?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config parse error")?;
    let file = write_config(b"[generator]\ntaint_anotation = \"Taint\"\n")?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config parse error")?;
    let file = write_config(b"[generator.annotations]\nself = \"Taint\"\n")?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_accepts_empty_file_with_defaults() -> TestResult {
    let file = write_config(b"")?;
    let config = TaintModelConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config != TaintModelConfig::default() {
        return Err(format!("unexpected config {config:?}"));
    }
    Ok(())
}

#[test]
fn load_runs_validation() -> TestResult {
    let file = write_config(b"[output]\npath = \"  \"\n")?;
    assert_invalid(TaintModelConfig::load(Some(file.path())), "output.path must be non-empty")?;
    Ok(())
}
