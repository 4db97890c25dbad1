//! Command pattern — actions with an inverse, dispatched from a remote control.
//!
//! Every [`Action`] knows how to apply itself and how to revert what it did.
//! The [`RemoteControl`] binds actions to numbered slots, records each
//! applied action on a [`History`] and can undo the most recent one. A
//! [`MacroAction`] groups several actions so they apply and revert as one.

pub mod action;
pub mod history;
pub mod macro_action;
pub mod remote;

pub use action::{
    Action, CloseDoor, LowerTemperature, OpenDoor, RaiseTemperature, SwitchOff, SwitchOn,
};
pub use history::History;
pub use macro_action::MacroAction;
pub use remote::{RemoteControl, SlotBinding};
