//! GPIO Abstractions
//!
//! Pin wrappers for the relay board. Provides semantic meaning to pins
//! through the type system.

use embedded_hal::digital::OutputPin;

use crate::activity::Indicator;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Activity LED driver
pub struct StatusLed<P> {
    pin: P,
    state: LedState,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create a new status LED (initially off)
    pub fn new(pin: P) -> Self {
        let mut led = Self {
            pin,
            state: LedState::On,
        };
        led.off();
        led
    }

    /// Turn LED on
    pub fn on(&mut self) {
        // RP2040 GPIO writes are infallible
        let _ = self.pin.set_high();
        self.state = LedState::On;
    }

    /// Turn LED off
    pub fn off(&mut self) {
        let _ = self.pin.set_low();
        self.state = LedState::Off;
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

impl<P: OutputPin> Indicator for StatusLed<P> {
    fn set_active(&mut self, active: bool) {
        match (active, self.state) {
            (true, LedState::Off) => self.on(),
            (false, LedState::On) => self.off(),
            _ => {}
        }
    }
}
