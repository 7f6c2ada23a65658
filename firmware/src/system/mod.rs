//! Abstraction of the board: port setup, inputs and outputs.

pub mod delay;

mod inputs;
mod outputs;

use avr_device::atmega328p::Peripherals;

pub use inputs::Inputs;
pub use outputs::Outputs;

pub struct System {
    pub inputs: Inputs,
    pub outputs: Outputs,
}

impl System {
    /// Initialize the system abstraction.
    ///
    /// Configures pin directions, arms the INT0 mode toggle line and
    /// flashes the boot indicator before handing the ports over.
    #[must_use]
    pub fn init(dp: Peripherals) -> Self {
        // The whole low half of PORTB drives outputs: bit 0 the motor
        // line, bits 1 to 5 the indicator bar. PORTD stays input-only.
        dp.PORTB.ddrb().write(|w| unsafe { w.bits(0b0011_1111) });
        dp.PORTB.portb().write(|w| unsafe { w.bits(0) });
        dp.PORTD.ddrd().write(|w| unsafe { w.bits(0) });

        // The mode toggle line triggers INT0 on its falling edge.
        dp.EXINT.eicra().modify(|_, w| unsafe { w.isc0().bits(0b10) });
        dp.EXINT.eimsk().modify(|_, w| w.int0().set_bit());
        // SAFETY: No interrupt handler touches shared state before
        // statics are initialized, they live in ROM-initialized memory.
        unsafe { avr_device::interrupt::enable() };

        let mut outputs = Outputs::new(dp.PORTB);
        outputs.flash_boot_indicator();

        Self {
            inputs: Inputs::new(dp.PORTD),
            outputs,
        }
    }
}
