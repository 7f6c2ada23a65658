//! ATmega328P binding of the soft-start controller.
//!
//! The main loop runs one pass per PWM period: it samples and debounces
//! the two polled buttons, drains the mode toggle latched by the INT0
//! handler, feeds everything to the control store and executes the
//! desired output with busy-wait timed port writes.

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::Cell;

use avr_device::atmega328p::Peripherals;
use avr_device::interrupt::{self, Mutex};
use panic_halt as _;

use softstart_control::input::snapshot::Snapshot;
use softstart_control::store::{Config, Store};

mod system;

use system::delay;
use system::System;

/// Mode toggle edges latched by the interrupt handler for the main loop.
///
/// The handler is the only writer setting it, the main loop clears it
/// while building a snapshot. Both sides access it under a critical
/// section, so an event arriving during a busy-wait phase is observed
/// no later than the next period.
static TOGGLE_LATCH: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();
    let mut system = System::init(dp);

    let mut store = Store::new(Config::default());

    loop {
        let (profile, stop) = system.inputs.sample();
        let toggle = interrupt::free(|cs| TOGGLE_LATCH.borrow(cs).replace(false));

        store.apply_input_snapshot(Snapshot {
            toggle,
            profile,
            stop,
        });
        let output = store.tick();
        system.outputs.drive(&output);
    }
}

#[avr_device::interrupt(atmega328p)]
fn INT0() {
    interrupt::free(|cs| TOGGLE_LATCH.borrow(cs).set(true));
    // Settle wait against electrical bounce, carried out inside the
    // handler. It blocks the interrupt return, a known limitation of
    // this wiring.
    delay::delay_ms(10);
}
