//! Beverage preparation — boil, brew, pour, then maybe add condiments.

use patternhub_domain::answer::Answer;

use crate::ports::Console;

/// The variant-specific steps of preparing a hot drink.
pub trait Beverage {
    fn name(&self) -> &str;

    fn brew(&self, console: &mut dyn Console);

    fn add_condiments(&self, console: &mut dyn Console);

    /// Hook deciding whether condiments are added. Defaults to yes.
    fn wants_condiments(&self, _console: &mut dyn Console) -> bool {
        true
    }
}

/// Whether condiments ended up in the cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condiments {
    Added,
    Skipped,
}

/// Prepares one kind of beverage following the fixed recipe.
pub struct Barista<B> {
    beverage: B,
}

impl<B: Beverage> Barista<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }

    pub fn beverage(&self) -> &B {
        &self.beverage
    }

    pub fn prepare(&self, console: &mut dyn Console) -> Condiments {
        let _span = tracing::debug_span!("prepare_beverage", name = self.beverage.name()).entered();

        Self::boil_water(console);
        self.beverage.brew(console);
        Self::pour_in_cup(console);

        if self.beverage.wants_condiments(console) {
            self.beverage.add_condiments(console);
            Condiments::Added
        } else {
            tracing::debug!("condiments declined");
            Condiments::Skipped
        }
    }

    fn boil_water(console: &mut dyn Console) {
        console.say("Boiling water");
    }

    fn pour_in_cup(console: &mut dyn Console) {
        console.say("Pouring into cup");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Tea;

impl Beverage for Tea {
    fn name(&self) -> &str {
        "tea"
    }

    fn brew(&self, console: &mut dyn Console) {
        console.say("Steeping the tea");
    }

    fn add_condiments(&self, console: &mut dyn Console) {
        console.say("Adding lemon");
    }
}

/// Coffee; asks before adding milk and sugar.
#[derive(Debug, Default, Clone, Copy)]
pub struct Coffee;

impl Beverage for Coffee {
    fn name(&self) -> &str {
        "coffee"
    }

    fn brew(&self, console: &mut dyn Console) {
        console.say("Dripping coffee through filter");
    }

    fn add_condiments(&self, console: &mut dyn Console) {
        console.say("Adding sugar and milk");
    }

    fn wants_condiments(&self, console: &mut dyn Console) -> bool {
        let reply = console.ask("Would you like milk and sugar with your coffee (y/n)? ");
        Answer::parse(reply.as_deref(), "y").is_yes()
    }
}
