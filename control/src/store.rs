//! The main store of the ramp control state machine.

use crate::display::Screen;
use crate::input::snapshot::Snapshot;
use crate::input::store::Store as Input;
use crate::log;
use crate::output::DesiredOutput;
use crate::profile::Profile;
use crate::pwm::Pwm;

/// How long the selected profile is announced before a ramp starts.
const ANNOUNCEMENT_MS: u32 = 200;

/// How long the diagnostic pattern of the overflow guard is held.
const FAILURE_HOLD_MS: u32 = 10_000;

/// Period of the software generated PWM, 100 Hz as wired in the module.
pub const DEFAULT_PERIOD_US: u32 = 10_000;

/// Build-time selection of the PWM cadence.
///
/// Wirings of the module differed in their busy-wait base unit. All of
/// them collapse into this single parameter, one pass of the control
/// loop takes exactly one period.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub period_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period_us: DEFAULT_PERIOD_US,
        }
    }
}

/// The main store of peripheral abstraction and ramp state.
///
/// This struct is the central piece of the control crate. It takes
/// `Snapshot` on its input, passes it to peripheral abstractions,
/// interprets their edges into mode and profile changes and manages the
/// whole state machine of the ramp. It is the sole writer of the duty
/// cycle progression and of the profile selection.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    state: State,
    input: Input,
    pwm: Pwm,
    /// The currently selected profile. It outlives individual ramps,
    /// only a stop/start cycle picks up a new selection.
    profile: Profile,
    duty_cycle: u8,
    announcement_ticks: u32,
    failure_ticks: u32,
    profile_change_queued: bool,
}

/// The current state of the ramp state machine.
///
/// `Off` is the only state with the motor line released. All the other
/// states belong to the running mode and carry the profile latched when
/// the ramp was started.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Off,
    Announcing(StateAnnouncing),
    Ramping(StateRamping),
    Steady,
    Failure(StateFailure),
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct StateAnnouncing {
    profile: Profile,
    remaining_ticks: u32,
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct StateRamping {
    profile: Profile,
    repeats: u32,
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct StateFailure {
    remaining_ticks: u32,
}

impl Default for State {
    fn default() -> Self {
        Self::Off
    }
}

impl Store {
    /// Initialize the store with the given PWM cadence.
    ///
    /// # Panics
    ///
    /// Panics when the configured period is zero.
    #[must_use]
    pub fn new(config: Config) -> Self {
        assert!(config.period_us > 0);
        Self {
            state: State::default(),
            input: Input::default(),
            pwm: Pwm::new(config.period_us),
            profile: Profile::default(),
            duty_cycle: 0,
            announcement_ticks: (ANNOUNCEMENT_MS * 1_000 / config.period_us).max(1),
            failure_ticks: (FAILURE_HOLD_MS * 1_000 / config.period_us).max(1),
            profile_change_queued: false,
        }
    }

    pub fn apply_input_snapshot(&mut self, snapshot: Snapshot) {
        self.input.update(snapshot);
        self.converge_internal_state();
    }

    fn converge_internal_state(&mut self) {
        if self.input.toggle {
            if matches!(self.state, State::Off) {
                self.start();
            } else {
                self.shut_down();
            }
        }

        if self.input.stop.clicked && !matches!(self.state, State::Off) {
            self.shut_down();
        }

        if self.input.profile.clicked {
            if matches!(self.state, State::Off) {
                self.select_next_profile();
            } else {
                // Never let a selection change alter the timing of the
                // ramp in progress. It gets applied once the mode
                // returns to off.
                self.profile_change_queued = true;
            }
        }
    }

    fn start(&mut self) {
        self.duty_cycle = 0;
        self.state = State::Announcing(StateAnnouncing {
            profile: self.profile,
            remaining_ticks: self.announcement_ticks,
        });
        log::info!("Starting ramp with profile={:?}", self.profile);
    }

    fn shut_down(&mut self) {
        self.duty_cycle = 0;
        self.state = State::Off;
        log::info!("Shutting down");
        if self.profile_change_queued {
            self.profile_change_queued = false;
            self.select_next_profile();
        }
    }

    fn select_next_profile(&mut self) {
        self.profile = self.profile.next();
        log::info!("Selecting profile={:?}", self.profile);
    }

    /// Advance time by one PWM period.
    ///
    /// The returned output covers the whole upcoming period. Events
    /// applied through the next snapshot take effect no later than the
    /// following tick, which bounds their staleness to one period.
    pub fn tick(&mut self) -> DesiredOutput {
        if self.duty_cycle > 100 && !matches!(self.state, State::Failure(_)) {
            // Unreachable through normal increments, reported visually
            // rather than propagated.
            self.state = State::Failure(StateFailure {
                remaining_ticks: self.failure_ticks,
            });
            log::info!("Duty cycle out of range");
        }

        match self.state {
            State::Off => self.output(Screen::Off, 0),
            State::Announcing(mut announcing) => {
                let output = self.output(Screen::Announcement(announcing.profile), 0);
                announcing.remaining_ticks -= 1;
                self.state = if announcing.remaining_ticks == 0 {
                    State::Ramping(StateRamping {
                        profile: announcing.profile,
                        repeats: 0,
                    })
                } else {
                    State::Announcing(announcing)
                };
                output
            }
            State::Ramping(mut ramping) => {
                let output = self.output(Screen::Progress(self.duty_cycle), self.duty_cycle);
                ramping.repeats += 1;
                if ramping.repeats == ramping.profile.step_repeats() {
                    ramping.repeats = 0;
                    self.duty_cycle += 1;
                }
                self.state = if self.duty_cycle == 100 {
                    log::info!("Reaching steady state");
                    State::Steady
                } else {
                    State::Ramping(ramping)
                };
                output
            }
            State::Steady => self.output(Screen::Progress(100), 100),
            State::Failure(mut failure) => {
                let output = self.output(Screen::Failure, 0);
                failure.remaining_ticks -= 1;
                self.state = if failure.remaining_ticks == 0 {
                    // The guard is purely diagnostic, execution resumes
                    // at full drive after the hold.
                    self.duty_cycle = 100;
                    State::Steady
                } else {
                    State::Failure(failure)
                };
                output
            }
        }
    }

    fn output(&self, screen: Screen, duty_cycle: u8) -> DesiredOutput {
        DesiredOutput {
            display: screen.leds(),
            frame: self.pwm.frame(duty_cycle),
        }
    }
}
