//! # patternhub-adapter-console
//!
//! Implementations of the [`Console`](patternhub_app::ports::Console) port.
//!
//! | Console | Reads from | Writes to |
//! |---------|------------|-----------|
//! | [`TerminalConsole`] | any `BufRead` (stdin by default) | any `Write` (stdout by default) |
//! | [`MemoryConsole`] | a queue of scripted answers | an in-memory transcript |
//!
//! ## Dependency rule
//!
//! Depends on `patternhub-app` (port traits) only.

mod memory;
mod terminal;

pub use memory::MemoryConsole;
pub use terminal::TerminalConsole;
