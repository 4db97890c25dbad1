//! # patternhub-domain
//!
//! Pure domain model shared by the pattern demonstrations.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (lights, doors, thermostats, …) and their observable state
//! - Define **Chat** values (messages, join/leave notices, join-notice policy)
//! - Define **Answers** (yes/no decisions read from the user)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod answer;
pub mod chat;
pub mod device;
