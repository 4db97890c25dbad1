//! Action — a unit of work paired with its inverse.

use std::cell::RefCell;
use std::rc::Rc;

use patternhub_domain::device::{Door, DoorPosition, Power, Switchable, Thermostat};

use crate::ports::Console;

/// A reversible unit of work.
///
/// Implementations hold a shared reference to the device they drive, so the
/// same action can be applied any number of times. Reverts happen in the
/// reverse order of applications; [`revert`](Self::revert) undoes the most
/// recent application that has not been reverted yet.
pub trait Action {
    fn apply(&self, console: &mut dyn Console);

    fn revert(&self, console: &mut dyn Console);

    /// Human-readable description, e.g. `"switch on Living room light"`.
    fn describe(&self) -> String;
}

/// States replaced by each application, most recent last.
struct Previous<T>(RefCell<Vec<T>>);

impl<T: Copy> Previous<T> {
    fn new() -> Self {
        Self(RefCell::new(Vec::new()))
    }

    fn push(&self, state: T) {
        self.0.borrow_mut().push(state);
    }

    /// The state to restore, or `fallback` when nothing was applied.
    fn pop_or(&self, fallback: T) -> T {
        self.0.borrow_mut().pop().unwrap_or(fallback)
    }
}

/// Switch a device on; reverting restores its previous power state.
pub struct SwitchOn<D> {
    device: Rc<D>,
    previous: Previous<Power>,
}

impl<D: Switchable> SwitchOn<D> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            device,
            previous: Previous::new(),
        }
    }
}

impl<D: Switchable> Action for SwitchOn<D> {
    fn apply(&self, console: &mut dyn Console) {
        self.previous.push(self.device.power());
        self.device.switch_on();
        console.say(&self.device.to_string());
    }

    fn revert(&self, console: &mut dyn Console) {
        self.device.set_power(self.previous.pop_or(Power::Off));
        console.say(&self.device.to_string());
    }

    fn describe(&self) -> String {
        format!("switch on {}", self.device.name())
    }
}

/// Switch a device off; reverting restores its previous power state.
pub struct SwitchOff<D> {
    device: Rc<D>,
    previous: Previous<Power>,
}

impl<D: Switchable> SwitchOff<D> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            device,
            previous: Previous::new(),
        }
    }
}

impl<D: Switchable> Action for SwitchOff<D> {
    fn apply(&self, console: &mut dyn Console) {
        self.previous.push(self.device.power());
        self.device.switch_off();
        console.say(&self.device.to_string());
    }

    fn revert(&self, console: &mut dyn Console) {
        self.device.set_power(self.previous.pop_or(Power::On));
        console.say(&self.device.to_string());
    }

    fn describe(&self) -> String {
        format!("switch off {}", self.device.name())
    }
}

pub struct OpenDoor {
    door: Rc<Door>,
    previous: Previous<DoorPosition>,
}

impl OpenDoor {
    pub fn new(door: Rc<Door>) -> Self {
        Self {
            door,
            previous: Previous::new(),
        }
    }
}

impl Action for OpenDoor {
    fn apply(&self, console: &mut dyn Console) {
        self.previous.push(self.door.position());
        self.door.open();
        console.say(&self.door.to_string());
    }

    fn revert(&self, console: &mut dyn Console) {
        self.door.set_position(self.previous.pop_or(DoorPosition::Closed));
        console.say(&self.door.to_string());
    }

    fn describe(&self) -> String {
        format!("open {}", self.door.name())
    }
}

pub struct CloseDoor {
    door: Rc<Door>,
    previous: Previous<DoorPosition>,
}

impl CloseDoor {
    pub fn new(door: Rc<Door>) -> Self {
        Self {
            door,
            previous: Previous::new(),
        }
    }
}

impl Action for CloseDoor {
    fn apply(&self, console: &mut dyn Console) {
        self.previous.push(self.door.position());
        self.door.close();
        console.say(&self.door.to_string());
    }

    fn revert(&self, console: &mut dyn Console) {
        self.door.set_position(self.previous.pop_or(DoorPosition::Open));
        console.say(&self.door.to_string());
    }

    fn describe(&self) -> String {
        format!("close {}", self.door.name())
    }
}

/// Raise a thermostat by one degree; reverting lowers it again.
pub struct RaiseTemperature {
    thermostat: Rc<Thermostat>,
}

impl RaiseTemperature {
    pub fn new(thermostat: Rc<Thermostat>) -> Self {
        Self { thermostat }
    }
}

impl Action for RaiseTemperature {
    fn apply(&self, console: &mut dyn Console) {
        let temperature = self.thermostat.raise();
        console.say(&format!("Temperature increased to {temperature}\u{b0}C"));
    }

    fn revert(&self, console: &mut dyn Console) {
        let temperature = self.thermostat.lower();
        console.say(&format!("Temperature decreased to {temperature}\u{b0}C"));
    }

    fn describe(&self) -> String {
        format!("raise {}", self.thermostat.name())
    }
}

/// Lower a thermostat by one degree; reverting raises it again.
pub struct LowerTemperature {
    thermostat: Rc<Thermostat>,
}

impl LowerTemperature {
    pub fn new(thermostat: Rc<Thermostat>) -> Self {
        Self { thermostat }
    }
}

impl Action for LowerTemperature {
    fn apply(&self, console: &mut dyn Console) {
        let temperature = self.thermostat.lower();
        console.say(&format!("Temperature decreased to {temperature}\u{b0}C"));
    }

    fn revert(&self, console: &mut dyn Console) {
        let temperature = self.thermostat.raise();
        console.say(&format!("Temperature increased to {temperature}\u{b0}C"));
    }

    fn describe(&self) -> String {
        format!("lower {}", self.thermostat.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;
    use patternhub_domain::device::Light;

    #[test]
    fn should_switch_device_on_and_report_status() {
        let light = Rc::new(Light::new("Living room light"));
        let mut console = RecordingConsole::default();

        SwitchOn::new(Rc::clone(&light)).apply(&mut console);

        assert_eq!(light.power(), Power::On);
        assert_eq!(console.lines, vec!["Living room light is on"]);
    }

    #[test]
    fn should_switch_device_off_when_switch_on_is_reverted() {
        let light = Rc::new(Light::new("Living room light"));
        let mut console = RecordingConsole::default();
        let action = SwitchOn::new(Rc::clone(&light));

        action.apply(&mut console);
        action.revert(&mut console);

        assert_eq!(light.power(), Power::Off);
        assert_eq!(console.lines.last().map(String::as_str), Some("Living room light is off"));
    }

    #[test]
    fn should_switch_device_back_on_when_switch_off_is_reverted() {
        let light = Rc::new(Light::new("Living room light"));
        light.switch_on();
        let mut console = RecordingConsole::default();
        let action = SwitchOff::new(Rc::clone(&light));

        action.apply(&mut console);
        assert_eq!(light.power(), Power::Off);
        action.revert(&mut console);
        assert_eq!(light.power(), Power::On);
    }

    #[test]
    fn should_leave_device_off_when_redundant_switch_off_is_reverted() {
        let light = Rc::new(Light::new("Living room light"));
        let mut console = RecordingConsole::default();
        let action = SwitchOff::new(Rc::clone(&light));

        action.apply(&mut console);
        action.revert(&mut console);

        assert_eq!(light.power(), Power::Off);
    }

    #[test]
    fn should_undo_repeated_applications_one_at_a_time() {
        let light = Rc::new(Light::new("Living room light"));
        let mut console = RecordingConsole::default();
        let action = SwitchOn::new(Rc::clone(&light));

        action.apply(&mut console);
        action.apply(&mut console);
        action.revert(&mut console);
        assert_eq!(light.power(), Power::On);
        action.revert(&mut console);
        assert_eq!(light.power(), Power::Off);
    }

    #[test]
    fn should_keep_door_open_when_redundant_open_is_reverted() {
        let door = Rc::new(Door::new("Front door"));
        door.open();
        let mut console = RecordingConsole::default();
        let open = OpenDoor::new(Rc::clone(&door));

        open.apply(&mut console);
        open.revert(&mut console);

        assert_eq!(door.position(), DoorPosition::Open);
    }

    #[test]
    fn should_restore_door_position_when_reverted() {
        let door = Rc::new(Door::new("Front door"));
        let mut console = RecordingConsole::default();
        let open = OpenDoor::new(Rc::clone(&door));
        let close = CloseDoor::new(Rc::clone(&door));

        open.apply(&mut console);
        assert_eq!(door.position(), DoorPosition::Open);
        close.apply(&mut console);
        close.revert(&mut console);
        assert_eq!(door.position(), DoorPosition::Open);
        open.revert(&mut console);
        assert_eq!(door.position(), DoorPosition::Closed);
    }

    #[test]
    fn should_step_temperature_and_report_new_value() {
        let thermostat = Rc::new(Thermostat::new("Hallway thermostat"));
        let mut console = RecordingConsole::default();
        let raise = RaiseTemperature::new(Rc::clone(&thermostat));

        raise.apply(&mut console);
        raise.apply(&mut console);
        raise.revert(&mut console);

        assert_eq!(thermostat.temperature(), 21);
        assert_eq!(
            console.lines,
            vec![
                "Temperature increased to 21\u{b0}C",
                "Temperature increased to 22\u{b0}C",
                "Temperature decreased to 21\u{b0}C",
            ]
        );
    }

    #[test]
    fn should_restore_temperature_when_lowering_is_reverted() {
        let thermostat = Rc::new(Thermostat::new("Hallway thermostat"));
        let mut console = RecordingConsole::default();
        let lower = LowerTemperature::new(Rc::clone(&thermostat));

        lower.apply(&mut console);
        assert_eq!(thermostat.temperature(), 19);
        lower.revert(&mut console);
        assert_eq!(thermostat.temperature(), 20);
    }

    #[test]
    fn should_describe_action_with_device_name() {
        let light = Rc::new(Light::new("Porch light"));
        assert_eq!(SwitchOn::new(Rc::clone(&light)).describe(), "switch on Porch light");
        assert_eq!(SwitchOff::new(light).describe(), "switch off Porch light");
    }
}
