//! Test-script generation engine.
//!
//! Converts recorded browser operation traces into a minimal set of
//! navigation scenarios over the application's screen graph, a page
//! object model with parameterized methods and input variations,
//! bounded combinatorial test data, and emitted source text (page
//! objects, test suites, data modules) plus a Mermaid screen transition
//! diagram.
//!
//! The engine is synchronous and pure: all inputs are materialized in
//! memory, no component blocks on I/O, and every generation run owns its
//! own identifier/model state, so independent runs may execute
//! concurrently without coordination.

pub mod cli;
pub mod codegen;
pub mod diagram;
pub mod graph;
pub mod identifier;
pub mod model;
pub mod script;
pub mod testdata;
pub mod trace;

pub use script::config::GenerateConfig;
pub use script::error::GenerateError;
pub use script::generator::{GeneratedFile, GeneratedTestScripts, generate_test_scripts};
