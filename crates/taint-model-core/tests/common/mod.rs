// crates/taint-model-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared view signatures for generator tests.
// Purpose: Provide one canonical fixture module for every generator suite.
// Dependencies: taint-model-core
// ============================================================================

//! ## Overview
//! Fixture signatures modelled on a small views module:
//!
//! ```text
//! class TestClass:
//!     def methodA(self, x: int): ...
//!     def methodB(self, *args): ...
//! def testA(): ...
//! def testB(x): ...
//! def testC(x: int): ...
//! def testD(x: int, *args: int): ...
//! def testE(x: int, **kwargs: str): ...
//! ```

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use taint_model_core::FunctionSignature;
use taint_model_core::Parameter;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Module qualifier shared by every fixture signature.
pub const QUALIFIER: &str = "qualifier";

/// Returns `qualifier.<name>`.
pub fn qualified(name: &str) -> String {
    format!("{QUALIFIER}.{name}")
}

/// Builds a string set.
pub fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Returns the full fixture module in declaration order.
pub fn all_functions() -> Vec<FunctionSignature> {
    vec![
        FunctionSignature::method(
            qualified("TestClass.methodA"),
            "TestClass",
            vec![Parameter::positional("self"), Parameter::positional("x").with_type("int")],
        ),
        FunctionSignature::method(
            qualified("TestClass.methodB"),
            "TestClass",
            vec![Parameter::positional("self"), Parameter::vararg("args")],
        ),
        FunctionSignature::function(qualified("testA"), Vec::new()),
        FunctionSignature::function(qualified("testB"), vec![Parameter::positional("x")]),
        FunctionSignature::function(
            qualified("testC"),
            vec![Parameter::positional("x").with_type("int")],
        ),
        FunctionSignature::function(
            qualified("testD"),
            vec![Parameter::positional("x").with_type("int"), Parameter::vararg("args").with_type("int")],
        ),
        FunctionSignature::function(
            qualified("testE"),
            vec![Parameter::positional("x").with_type("int"), Parameter::kwarg("kwargs").with_type("str")],
        ),
    ]
}

/// Returns the reduced fixture: `methodA`, `testA`, `testB`, `testC`.
pub fn basic_functions() -> Vec<FunctionSignature> {
    let keep = ["TestClass.methodA", "testA", "testB", "testC"].map(qualified);
    all_functions().into_iter().filter(|signature| keep.contains(&signature.qualified_name)).collect()
}

/// Renders stub text for comparison.
pub fn texts(models: &[taint_model_core::ModelStub]) -> Vec<String> {
    models.iter().map(ToString::to_string).collect()
}
