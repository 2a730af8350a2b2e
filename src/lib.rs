//! Config-driven rhai script execution harness.
//!
//! Loads named script snippets from a scripts file, runs each one through an
//! embedded rhai engine with randomized sample bindings, converts the result
//! to its declared return type, and prints the produced message.

pub mod config;
pub mod params;
pub mod printer;
pub mod registry;
pub mod runner;
pub mod script;
