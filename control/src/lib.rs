//! Control core of a motor soft-start module.
//!
//! This crate holds the whole ramp state machine, free of any hardware
//! dependency, so it can be exercised on a host. The firmware binding is
//! expected to run one loop per PWM period: sample and debounce the
//! buttons, drain the mode toggle latched by the interrupt handler, pass
//! everything in as a snapshot, and execute the desired output it gets
//! back:
//!
//! ```text
//!  [ ToggleHandler ]          [ MainLoop ]
//!         |                    |        A
//!   (toggle latch)     (Snapshot)    (DesiredOutput)
//!         |                    |        |
//!         +----------------> [ Store ] -+
//!                               |
//!                   {state, profile, duty cycle}
//! ```

#![no_std]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

mod log;

pub mod display;
pub mod input;
pub mod output;
pub mod profile;
pub mod pwm;
pub mod store;
