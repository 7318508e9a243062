// crates/taint-model-cli/tests/common/mod.rs
// ============================================================================
// Module: CLI Test Helpers
// Description: Binary invocation and fixture files for CLI integration tests.
// Purpose: Run taint-model-gen in an isolated environment.
// Dependencies: taint-model-cli binary, tempfile
// ============================================================================

//! ## Overview
//! Each test gets its own temp directory holding a signature file and a
//! config file. The binary runs with every `TAINT_MODEL_*` variable cleared
//! so results never depend on the caller's shell.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use tempfile::TempDir;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Signatures for a small views module.
pub const SIGNATURES: &str = r#"[
  {
    "qualified_name": "views.UserView.get",
    "owner_class": "UserView",
    "parameters": [
      {"name": "self"},
      {"name": "request", "declared_type": "HttpRequest"},
      {"name": "pk", "declared_type": "int"}
    ]
  },
  {"qualified_name": "views.health"},
  {
    "qualified_name": "views.search",
    "parameters": [
      {"name": "request"},
      {"name": "kwargs", "kind": "kwarg"}
    ]
  }
]"#;

/// Config exercising views, names, and types.
pub const CONFIG: &str = r#"
[generator]
taint_annotation = "Taint"
whitelisted_views = ["views.health"]

[generator.whitelisted_parameters]
parameter_name = ["self"]
parameter_type = ["int"]

[signatures]
path = "signatures.json"
"#;

/// Model file rendered from [`SIGNATURES`] under [`CONFIG`].
pub const EXPECTED_MODELS: &str = "def views.UserView.get(self, request: Taint, pk): ...\n\
                                   def views.search(request: Taint, **kwargs: Taint): ...\n";

// ============================================================================
// SECTION: Workspace
// ============================================================================

/// Temp directory with fixture files written into it.
pub struct Workspace {
    /// Owned temp directory.
    dir: TempDir,
}

impl Workspace {
    /// Creates a workspace holding `signatures.json` and `taint-models.toml`.
    pub fn new() -> Self {
        let workspace = Self {
            dir: tempfile::tempdir().expect("temp dir"),
        };
        workspace.write("signatures.json", SIGNATURES);
        workspace.write("taint-models.toml", CONFIG);
        workspace
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Returns an absolute path inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes a file relative to the workspace root.
    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.path(name), contents).expect("write fixture");
    }

    /// Reads a file relative to the workspace root.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read file")
    }

    /// Runs the binary with the workspace as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run taint-model-gen")
    }

    /// Builds an isolated command for the binary.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(bin());
        command
            .args(args)
            .current_dir(self.root())
            .env_remove("TAINT_MODEL_CONFIG")
            .env_remove("TAINT_MODEL_LANG")
            .env_remove("TAINT_MODEL_LOG");
        command
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Path of the compiled binary.
pub fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_taint-model-gen"))
}

/// Captured stdout as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
