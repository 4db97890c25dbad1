//! Macro action — several actions applied and reverted as one.

use super::action::Action;
use crate::ports::Console;

/// An ordered group of actions behaving as a single [`Action`].
///
/// Applying runs every step front to back; reverting runs every step's
/// inverse back to front, so each step is undone in the state it left behind.
#[derive(Default)]
pub struct MacroAction {
    steps: Vec<Box<dyn Action>>,
}

impl MacroAction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    #[must_use]
    pub fn then(mut self, action: impl Action + 'static) -> Self {
        self.steps.push(Box::new(action));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Box<dyn Action>> for MacroAction {
    fn from_iter<I: IntoIterator<Item = Box<dyn Action>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Action for MacroAction {
    fn apply(&self, console: &mut dyn Console) {
        for step in &self.steps {
            step.apply(console);
        }
    }

    fn revert(&self, console: &mut dyn Console) {
        for step in self.steps.iter().rev() {
            step.revert(console);
        }
    }

    fn describe(&self) -> String {
        let steps: Vec<String> = self.steps.iter().map(|step| step.describe()).collect();
        format!("macro [{}]", steps.join(", "))
    }
}
