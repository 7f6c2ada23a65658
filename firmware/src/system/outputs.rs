//! Driving of the shared output port.
//!
//! The motor line and the five indicator lines live on one port. Every
//! phase of a PWM frame is a single port write carrying both, so the
//! indicator bar never flickers against the motor timing.

use avr_device::atmega328p::PORTB;

use softstart_control::output::DesiredOutput;

use super::delay;

const MOTOR_BIT: u8 = 1 << 0;

pub struct Outputs {
    portb: PORTB,
}

impl Outputs {
    #[must_use]
    pub fn new(portb: PORTB) -> Self {
        Self { portb }
    }

    /// All lines high for a moment and low again, announcing power-on.
    pub fn flash_boot_indicator(&mut self) {
        self.write(0b0011_1111);
        delay::delay_ms(250);
        self.write(0);
        delay::delay_ms(250);
    }

    /// Execute one PWM frame together with the indicator update.
    pub fn drive(&mut self, output: &DesiredOutput) {
        let display = display_bits(output.display);
        if output.frame.time_on_us > 0 {
            self.write(display | MOTOR_BIT);
            delay::delay_us(output.frame.time_on_us);
        }
        if output.frame.time_off_us > 0 {
            self.write(display);
            delay::delay_us(output.frame.time_off_us);
        }
    }

    fn write(&mut self, bits: u8) {
        self.portb.portb().write(|w| unsafe { w.bits(bits) });
    }
}

// The bar fills from the top of the port down: the first indicator sits
// on bit 5, the last one on bit 1.
fn display_bits(display: [bool; 5]) -> u8 {
    let mut bits = 0;
    for (i, lit) in display.iter().enumerate() {
        if *lit {
            bits |= 1 << (5 - i);
        }
    }
    bits
}
