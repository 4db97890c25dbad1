//! Remote control — numbered slots of on/off actions with undo.

use std::fmt;
use std::rc::Rc;

use patternhub_domain::error::{PatternHubError, SlotError, ValidationError};

use super::action::Action;
use super::history::History;
use crate::ports::Console;

/// The on/off pair bound to one slot. Either side may be left empty.
#[derive(Default, Clone)]
pub struct SlotBinding {
    on: Option<Rc<dyn Action>>,
    off: Option<Rc<dyn Action>>,
}

impl SlotBinding {
    /// An empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind both buttons at once.
    #[must_use]
    pub fn pair(on: impl Action + 'static, off: impl Action + 'static) -> Self {
        Self::new().on(on).off(off)
    }

    #[must_use]
    pub fn on(mut self, action: impl Action + 'static) -> Self {
        self.on = Some(Rc::new(action));
        self
    }

    #[must_use]
    pub fn off(mut self, action: impl Action + 'static) -> Self {
        self.off = Some(Rc::new(action));
        self
    }

    fn action(&self, button: Button) -> Option<&Rc<dyn Action>> {
        match button {
            Button::On => self.on.as_ref(),
            Button::Off => self.off.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Button {
    On,
    Off,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// Dispatches actions bound to numbered slots and undoes them in reverse.
pub struct RemoteControl {
    slots: Vec<SlotBinding>,
    history: History,
}

impl RemoteControl {
    /// Create a remote with `slots` empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoSlots`] when `slots` is zero.
    pub fn new(slots: usize) -> Result<Self, PatternHubError> {
        if slots == 0 {
            return Err(ValidationError::NoSlots.into());
        }
        Ok(Self {
            slots: vec![SlotBinding::default(); slots],
            history: History::new(),
        })
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Bind an on/off pair to slot `index`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] when `index` is not a slot of this remote.
    #[tracing::instrument(skip(self, binding))]
    pub fn set_slot(
        &mut self,
        index: usize,
        binding: SlotBinding,
    ) -> Result<(), PatternHubError> {
        let slots = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { slot: index, slots })?;
        *slot = binding;
        Ok(())
    }

    /// Press the "on" button of slot `index`.
    ///
    /// An unbound button only prints a notice and records nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] when `index` is not a slot of this remote.
    #[tracing::instrument(skip(self, console))]
    pub fn press_on(
        &mut self,
        index: usize,
        console: &mut dyn Console,
    ) -> Result<(), PatternHubError> {
        self.press(index, Button::On, console)
    }

    /// Press the "off" button of slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] when `index` is not a slot of this remote.
    #[tracing::instrument(skip(self, console))]
    pub fn press_off(
        &mut self,
        index: usize,
        console: &mut dyn Console,
    ) -> Result<(), PatternHubError> {
        self.press(index, Button::Off, console)
    }

    /// Revert the most recently applied action.
    ///
    /// Returns the description of the undone action, or `None` (after
    /// printing a notice) when there is nothing to undo.
    #[tracing::instrument(skip_all)]
    pub fn undo_last(&mut self, console: &mut dyn Console) -> Option<String> {
        let Some(action) = self.history.pop() else {
            console.say("Nothing to undo.");
            return None;
        };
        action.revert(console);
        let description = action.describe();
        tracing::debug!(action = %description, remaining = self.history.len(), "undid action");
        Some(description)
    }

    fn press(
        &mut self,
        index: usize,
        button: Button,
        console: &mut dyn Console,
    ) -> Result<(), PatternHubError> {
        let slots = self.slots.len();
        let slot = self
            .slots
            .get(index)
            .ok_or(SlotError::OutOfRange { slot: index, slots })?;

        let Some(action) = slot.action(button).cloned() else {
            tracing::debug!(%button, "no action bound");
            console.say(&format!("No action assigned to slot {index}."));
            return Ok(());
        };

        action.apply(console);
        tracing::debug!(%button, action = %action.describe(), "applied action");
        self.history.record(action);
        Ok(())
    }
}
