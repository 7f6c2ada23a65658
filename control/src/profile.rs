//! Ramp profiles selecting how long the soft start takes.

/// One of the three fixed ramp durations.
///
/// A profile pairs the nominal ramp duration with the number of PWM
/// periods spent on every 1% duty cycle increment. The two are tied
/// together by construction: with a 10 ms period, 100 increments of
/// `step_repeats` periods each add up to the nominal duration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Profile {
    #[default]
    Seconds6,
    Seconds10,
    Seconds15,
}

impl Profile {
    /// Nominal wall-clock time of a full 0 to 100% ramp.
    #[must_use]
    pub fn total_duration_ms(self) -> u32 {
        match self {
            Self::Seconds6 => 6_000,
            Self::Seconds10 => 10_000,
            Self::Seconds15 => 15_000,
        }
    }

    /// Number of PWM periods driven per 1% duty cycle increment.
    #[must_use]
    pub fn step_repeats(self) -> u32 {
        match self {
            Self::Seconds6 => 6,
            Self::Seconds10 => 10,
            Self::Seconds15 => 15,
        }
    }

    /// The single indicator announcing this profile before a ramp.
    #[must_use]
    pub fn announcement_led(self) -> usize {
        match self {
            Self::Seconds6 => 0,
            Self::Seconds10 => 1,
            Self::Seconds15 => 2,
        }
    }

    /// The profile following this one in the fixed selection cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Seconds6 => Self::Seconds10,
            Self::Seconds10 => Self::Seconds15,
            Self::Seconds15 => Self::Seconds6,
        }
    }
}
