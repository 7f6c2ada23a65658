//! Process all input peripherals over time.

use super::button::Button;
use super::snapshot::Snapshot;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted
/// peripherals. The buttons provide press edge detection, the toggle
/// event is passed through as it arrives already edge-typed from the
/// interrupt handler.
///
/// Note that despite all its attributes are public, they should be only
/// read from.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub toggle: bool,
    pub profile: Button,
    pub stop: Button,
}

impl Store {
    pub fn update(&mut self, snapshot: Snapshot) {
        self.toggle = snapshot.toggle;
        self.profile.update(snapshot.profile);
        self.stop.update(snapshot.stop);
    }
}
