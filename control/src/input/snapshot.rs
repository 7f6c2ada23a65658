//! Structures used to pass the current state of hardware peripherals.

/// The current state of all inputs, taken once per PWM period.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package. It should pass pretty raw data, with two exceptions:
///
/// 1. Button debouncing is done by the caller: a button level is reported
///    as active only after it was sampled active, held through a 10 ms
///    settle delay and sampled active again.
/// 2. The mode toggle is event-typed. The interrupt handler latches the
///    edge, and the caller drains the latch into `toggle` when building
///    the snapshot, so the event is never lost between two loop passes.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// A mode toggle edge was latched since the previous snapshot.
    pub toggle: bool,
    /// Debounced level of the profile change button.
    pub profile: bool,
    /// Debounced level of the soft-stop button.
    pub stop: bool,
}
