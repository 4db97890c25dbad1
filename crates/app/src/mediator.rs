//! Mediator — a chat room relaying messages between its participants.
//!
//! Participants never talk to each other directly. They hold a weak
//! reference to the [`ChatRoom`] they joined and hand every message to it;
//! the room decides who receives what and announces joins and departures.

pub mod chat_room;
pub mod participant;

pub use chat_room::ChatRoom;
pub use participant::{ChatUser, Participant};
