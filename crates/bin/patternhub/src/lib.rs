//! # patternhub
//!
//! Wiring for the `patternhub` binary: command-line parsing, configuration
//! and the demo scripts that drive the pattern subsystems.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no pattern logic belongs here.

pub mod cli;
pub mod config;
pub mod demos;
