use crate::pwm::Frame;

/// Desired state of output peripherals for one PWM period.
///
/// This structure transfers the request to the firmware binding, asking
/// it to lit indicator LEDs and to drive the motor line high and low for
/// the two phases of the frame. Indicator bits and the motor bit share
/// one output port and must be written together to avoid flicker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub display: [bool; 5],
    pub frame: Frame,
}
