//! State machine representing the 5 indicator LEDs of the module.
//!
//! The same lines show the ramp progress bar, the profile announcement
//! and the diagnostic pattern, never more than one of them at a time.

use crate::profile::Profile;

/// What the indicator bar currently communicates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    #[default]
    Off,
    /// Bar graph of the current duty cycle while ramping or steady.
    Progress(u8),
    /// Single lit indicator of the selected profile before a ramp.
    Announcement(Profile),
    /// Distinct alternating pattern of the duty cycle overflow guard.
    Failure,
}

impl Screen {
    /// Render the screen into the desired state of the indicator lines.
    #[must_use]
    pub fn leds(self) -> [bool; 5] {
        match self {
            Self::Off => [false; 5],
            Self::Progress(duty_cycle) => {
                let mut leds = [false; 5];
                for led in leds.iter_mut().take(lit_indicators(duty_cycle)) {
                    *led = true;
                }
                leds
            }
            Self::Announcement(profile) => {
                let mut leds = [false; 5];
                leds[profile.announcement_led()] = true;
                leds
            }
            Self::Failure => [true, false, true, false, true],
        }
    }
}

fn lit_indicators(duty_cycle: u8) -> usize {
    match duty_cycle {
        0..=19 => 0,
        20..=39 => 1,
        40..=59 => 2,
        60..=79 => 3,
        80..=99 => 4,
        _ => 5,
    }
}
