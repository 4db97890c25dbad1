//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the pattern subsystems and the outside
//! world. They are defined here (in `app`) so that both the subsystems and
//! the adapters can depend on them without creating circular dependencies.

pub mod console;

pub use console::Console;
