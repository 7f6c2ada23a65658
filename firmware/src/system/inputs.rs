//! Sampling of the two polled, active-low buttons.

use avr_device::atmega328p::PORTD;

use super::delay;

/// Settle wait confirming a pressed level, shared by all buttons.
const SETTLE_MS: u32 = 10;

const PROFILE_PIN: u8 = 6;
const STOP_PIN: u8 = 7;

pub struct Inputs {
    portd: PORTD,
}

impl Inputs {
    #[must_use]
    pub fn new(portd: PORTD) -> Self {
        Self { portd }
    }

    /// Debounced levels of the profile and stop buttons.
    ///
    /// A pressed level is reported only after it was sampled active,
    /// held through the settle wait and sampled active again. The wait
    /// blocks the loop for up to 10 ms per observed press, chatter
    /// faster than that is not filtered. Press edge detection happens
    /// in the control crate.
    pub fn sample(&mut self) -> (bool, bool) {
        (self.settled(PROFILE_PIN), self.settled(STOP_PIN))
    }

    fn settled(&self, pin: u8) -> bool {
        if !self.is_low(pin) {
            return false;
        }
        delay::delay_ms(SETTLE_MS);
        self.is_low(pin)
    }

    fn is_low(&self, pin: u8) -> bool {
        self.portd.pind().read().bits() & (1u8 << pin) == 0
    }
}
