//! Demo scripts — fixed sequences that drive each pattern subsystem.

use std::rc::Rc;

use patternhub_app::command::{
    CloseDoor, LowerTemperature, MacroAction, OpenDoor, RaiseTemperature, RemoteControl,
    SlotBinding, SwitchOff, SwitchOn,
};
use patternhub_app::mediator::{ChatRoom, ChatUser, Participant};
use patternhub_app::ports::Console;
use patternhub_app::template::{
    Barista, Coffee, ExcelReport, HtmlReport, PdfReport, ReportGenerator, Tea,
};
use patternhub_domain::device::{AirConditioner, Door, Light, Television, Thermostat};
use patternhub_domain::error::PatternHubError;

use crate::cli::Demo;
use crate::config::Config;

/// Run `demo` against `console`.
///
/// # Errors
///
/// Returns an error if the configured remote is too small for the command
/// demo.
pub fn run(
    demo: Demo,
    config: &Config,
    console: &mut dyn Console,
) -> Result<(), PatternHubError> {
    match demo {
        Demo::Command => command(config, console),
        Demo::Template => {
            template(console);
            Ok(())
        }
        Demo::Mediator => mediator(config, console),
        Demo::All => {
            command(config, console)?;
            template(console);
            mediator(config, console)
        }
    }
}

fn heading(console: &mut dyn Console, title: &str) {
    console.say("");
    console.say(&format!("=== {title} ==="));
}

/// Both remote-control walkthroughs.
///
/// # Errors
///
/// Returns an error if the configured remote has fewer slots than the demo binds.
pub fn command(config: &Config, console: &mut dyn Console) -> Result<(), PatternHubError> {
    living_room_remote(config.remote.slots, console)?;
    home_remote(config.remote.slots, console)
}

#[tracing::instrument(skip(console))]
fn living_room_remote(slots: usize, console: &mut dyn Console) -> Result<(), PatternHubError> {
    heading(console, "Command: living room remote");

    let light = Rc::new(Light::new("Living room light"));
    let ac = Rc::new(AirConditioner::new("Air conditioner"));
    let tv = Rc::new(Television::new("Television"));

    let mut remote = RemoteControl::new(slots)?;
    remote.set_slot(
        0,
        SlotBinding::pair(
            SwitchOn::new(Rc::clone(&light)),
            SwitchOff::new(Rc::clone(&light)),
        ),
    )?;
    remote.set_slot(
        1,
        SlotBinding::pair(
            SwitchOn::new(Rc::clone(&ac)),
            SwitchOff::new(Rc::clone(&ac)),
        ),
    )?;
    remote.set_slot(
        2,
        SlotBinding::pair(
            SwitchOn::new(Rc::clone(&tv)),
            SwitchOff::new(Rc::clone(&tv)),
        ),
    )?;

    for slot in 0..3 {
        remote.press_on(slot, console)?;
        remote.press_off(slot, console)?;
    }

    console.say("-- undo twice --");
    remote.undo_last(console);
    remote.undo_last(console);

    console.say("-- everything on, as one action --");
    let all_on = MacroAction::new()
        .then(SwitchOn::new(Rc::clone(&light)))
        .then(SwitchOn::new(Rc::clone(&ac)))
        .then(SwitchOn::new(Rc::clone(&tv)));
    remote.set_slot(0, SlotBinding::new().on(all_on))?;
    remote.press_on(0, console)?;

    console.say("-- undo the macro --");
    remote.undo_last(console);
    remote.press_off(0, console)?;
    Ok(())
}

#[tracing::instrument(skip(console))]
fn home_remote(slots: usize, console: &mut dyn Console) -> Result<(), PatternHubError> {
    heading(console, "Command: light, door and thermostat");

    let light = Rc::new(Light::new("Kitchen light"));
    let door = Rc::new(Door::new("Front door"));
    let thermostat = Rc::new(Thermostat::new("Thermostat"));

    let mut remote = RemoteControl::new(slots)?;
    remote.set_slot(
        0,
        SlotBinding::pair(
            SwitchOn::new(Rc::clone(&light)),
            SwitchOff::new(Rc::clone(&light)),
        ),
    )?;
    remote.set_slot(
        1,
        SlotBinding::pair(
            OpenDoor::new(Rc::clone(&door)),
            CloseDoor::new(Rc::clone(&door)),
        ),
    )?;
    remote.set_slot(
        2,
        SlotBinding::pair(
            RaiseTemperature::new(Rc::clone(&thermostat)),
            LowerTemperature::new(Rc::clone(&thermostat)),
        ),
    )?;

    remote.press_on(0, console)?;
    remote.press_off(0, console)?;
    remote.undo_last(console);

    remote.press_on(1, console)?;
    remote.press_off(1, console)?;
    remote.undo_last(console);

    remote.press_on(2, console)?;
    remote.press_on(2, console)?;
    remote.undo_last(console);

    console.say("-- undo everything that is left --");
    while !remote.history().is_empty() {
        remote.undo_last(console);
    }
    remote.undo_last(console);
    Ok(())
}

/// Two beverages and three reports.
pub fn template(console: &mut dyn Console) {
    heading(console, "Template method: beverages");
    console.say("-- tea --");
    Barista::new(Tea).prepare(console);
    console.say("-- coffee --");
    Barista::new(Coffee).prepare(console);

    heading(console, "Template method: reports");
    console.say("-- PDF --");
    ReportGenerator::new(PdfReport).generate(console);
    console.say("-- Excel --");
    ReportGenerator::new(ExcelReport).generate(console);
    console.say("-- HTML --");
    ReportGenerator::new(HtmlReport).generate(console);
}

/// Three users chat, one leaves and then tries to keep talking.
///
/// # Errors
///
/// Propagates [`ChatUser::new`] validation. The demo's user names are
/// non-blank literals, so this only fails if one of them is edited to be blank.
#[tracing::instrument(skip_all)]
pub fn mediator(config: &Config, console: &mut dyn Console) -> Result<(), PatternHubError> {
    heading(console, "Mediator: chat room");

    let room = ChatRoom::new(config.chat.join_notice);
    let alice = Rc::new(ChatUser::new("Alice")?);
    let bob = Rc::new(ChatUser::new("Bob")?);
    let charlie = Rc::new(ChatUser::new("Charlie")?);

    for user in [&alice, &bob, &charlie] {
        let member: Rc<dyn Participant> = user.clone();
        room.register(member, console);
    }

    alice.send("Hi everyone!", console);
    bob.send("Hello Alice!", console);
    charlie.send("Hey, what's up?", console);

    room.remove(&*bob, console);
    charlie.send("Bob left, it's just us now.", console);
    bob.send("Can anyone hear me?", console);

    tracing::debug!(members = ?room.member_names(), "chat demo finished");
    Ok(())
}
