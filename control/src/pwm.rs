//! Software PWM timing split.

/// Timing of the software generated PWM signal.
///
/// The motor line is not driven by a hardware peripheral. Instead, the
/// main loop holds it high and low with busy-wait delays, one frame per
/// loop pass. This structure owns the period and splits it into the two
/// phases for a given duty cycle.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pwm {
    period_us: u32,
}

/// High and low phase of a single PWM period.
///
/// The two phases always add up to the full period, a frame never drifts
/// within one call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub time_on_us: u32,
    pub time_off_us: u32,
}

impl Pwm {
    #[must_use]
    pub fn new(period_us: u32) -> Self {
        Self { period_us }
    }

    #[must_use]
    pub fn period_us(self) -> u32 {
        self.period_us
    }

    /// Split the period for the given duty cycle, truncating integer
    /// arithmetic. The caller must keep the duty cycle within 0 to 100.
    #[must_use]
    pub fn frame(self, duty_cycle: u8) -> Frame {
        let time_on_us = self.period_us * u32::from(duty_cycle) / 100;
        Frame {
            time_on_us,
            time_off_us: self.period_us - time_on_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_always_add_up_to_the_full_period() {
        for period_us in [100, 1_000, 10_000] {
            let pwm = Pwm::new(period_us);
            for duty_cycle in 0..=100 {
                let frame = pwm.frame(duty_cycle);
                assert_eq!(frame.time_on_us + frame.time_off_us, period_us);
            }
        }
    }

    #[test]
    fn high_phase_is_the_truncated_fraction_of_the_period() {
        let pwm = Pwm::new(10_000);
        for duty_cycle in 0..=100 {
            let frame = pwm.frame(duty_cycle);
            assert_eq!(frame.time_on_us, 10_000 * u32::from(duty_cycle) / 100);
        }
    }

    #[test]
    fn extreme_duty_cycles_keep_one_phase_empty() {
        let pwm = Pwm::new(10_000);
        assert_eq!(pwm.frame(0).time_on_us, 0);
        assert_eq!(pwm.frame(0).time_off_us, 10_000);
        assert_eq!(pwm.frame(100).time_on_us, 10_000);
        assert_eq!(pwm.frame(100).time_off_us, 0);
    }

    #[test]
    fn high_phase_grows_monotonically_with_duty_cycle() {
        let pwm = Pwm::new(10_000);
        let mut previous = 0;
        for duty_cycle in 0..=100 {
            let time_on_us = pwm.frame(duty_cycle).time_on_us;
            assert!(time_on_us >= previous);
            previous = time_on_us;
        }
    }
}
