//! # patternhub-app
//!
//! Application layer — the three pattern subsystems and the **port
//! definitions** (traits) they talk to the outside world through.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Console` — print a status line, ask a yes/no question
//! - **Command**: actions with an inverse, a remote control with numbered
//!   slots, an undo history and macro actions
//! - **Template method**: report and beverage skeletons whose step order is
//!   fixed while individual steps vary per variant
//! - **Mediator**: a chat room relaying messages and membership notices
//!   between participants
//!
//! ## Dependency rule
//! Depends on `patternhub-domain` only (plus `tracing` for diagnostics).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod mediator;
pub mod ports;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;
