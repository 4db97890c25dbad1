//! Undo history — a stack of applied actions.

use std::rc::Rc;

use super::action::Action;

/// Last-in-first-out record of applied actions.
///
/// The history only stores what was applied; whether reverting really
/// restores the previous state is up to each [`Action`].
#[derive(Default)]
pub struct History {
    entries: Vec<Rc<dyn Action>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: Rc<dyn Action>) {
        self.entries.push(action);
    }

    /// Remove and return the most recently recorded action.
    pub fn pop(&mut self) -> Option<Rc<dyn Action>> {
        self.entries.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
