//! The line-oriented bookmark shell.
//!
//! A line is split into words ([`tokenize`]), parsed with clap ([`line`])
//! and run against a session ([`interpreter`]). The `shell` and `run`
//! commands only differ in where lines come from.

pub mod interpreter;
pub mod line;
pub mod tokenize;

pub use interpreter::{Flow, Interpreter};
