//! Device — a named thing holding trivial mutable state.
//!
//! Devices are shared between the actions that drive them, so their state
//! lives behind a [`Cell`] and every mutating operation takes `&self`.

mod state;

pub use state::{DoorPosition, Power};

use std::cell::Cell;
use std::fmt;

/// Temperature a [`Thermostat`] starts at, in degrees Celsius.
pub const DEFAULT_TEMPERATURE: i32 = 20;

/// A device with an on/off power state.
///
/// The [`Display`](fmt::Display) form is the status line printed after a change.
pub trait Switchable: fmt::Display {
    /// Display name, e.g. `"Living room light"`.
    fn name(&self) -> &str;

    /// Current power state.
    fn power(&self) -> Power;

    fn switch_on(&self);

    fn switch_off(&self);

    /// Put the device back into `power`.
    fn set_power(&self, power: Power) {
        match power {
            Power::On => self.switch_on(),
            Power::Off => self.switch_off(),
        }
    }
}

macro_rules! define_switchable {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug)]
        pub struct $name {
            name: String,
            power: Cell<Power>,
        }

        impl $name {
            /// Create a device that starts switched off.
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    power: Cell::new(Power::default()),
                }
            }
        }

        impl Switchable for $name {
            fn name(&self) -> &str {
                &self.name
            }

            fn power(&self) -> Power {
                self.power.get()
            }

            fn switch_on(&self) {
                self.power.set(Power::On);
            }

            fn switch_off(&self) {
                self.power.set(Power::Off);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} is {}", self.name, self.power.get())
            }
        }
    };
}

define_switchable!(
    /// A light.
    Light
);

define_switchable!(
    /// An air conditioner.
    AirConditioner
);

define_switchable!(
    /// A television set.
    Television
);

/// A door that can be opened and closed.
#[derive(Debug)]
pub struct Door {
    name: String,
    position: Cell<DoorPosition>,
}

impl Door {
    /// Create a closed door.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Cell::new(DoorPosition::default()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> DoorPosition {
        self.position.get()
    }

    pub fn open(&self) {
        self.position.set(DoorPosition::Open);
    }

    pub fn close(&self) {
        self.position.set(DoorPosition::Closed);
    }

    pub fn set_position(&self, position: DoorPosition) {
        self.position.set(position);
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.name, self.position.get())
    }
}

/// A thermostat holding a target temperature in whole degrees Celsius.
#[derive(Debug)]
pub struct Thermostat {
    name: String,
    temperature: Cell<i32>,
}

impl Thermostat {
    /// Create a thermostat set to [`DEFAULT_TEMPERATURE`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_temperature(name, DEFAULT_TEMPERATURE)
    }

    #[must_use]
    pub fn with_temperature(name: impl Into<String>, temperature: i32) -> Self {
        Self {
            name: name.into(),
            temperature: Cell::new(temperature),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature.get()
    }

    /// Raise the temperature by one degree, returning the new value.
    ///
    /// Saturates at [`i32::MAX`].
    pub fn raise(&self) -> i32 {
        let next = self.temperature.get().saturating_add(1);
        self.temperature.set(next);
        next
    }

    /// Lower the temperature by one degree, returning the new value.
    ///
    /// Saturates at [`i32::MIN`].
    pub fn lower(&self) -> i32 {
        let next = self.temperature.get().saturating_sub(1);
        self.temperature.set(next);
        next
    }
}

impl fmt::Display for Thermostat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is set to {}\u{b0}C",
            self.name,
            self.temperature.get()
        )
    }
}
