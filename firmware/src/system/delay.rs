//! Calibrated busy-wait delays.
//!
//! The board runs without a free timer peripheral, all PWM phases and
//! settle waits spin on the CPU. The calibration assumes the 16 MHz
//! crystal and is approximate, which the module accepts.

const CYCLES_PER_US: u32 = 16;

/// Iterations of the spin loop per microsecond. One iteration takes
/// roughly four cycles: the nop, the decrement and the branch.
const LOOPS_PER_US: u32 = CYCLES_PER_US / 4;

pub fn delay_us(us: u32) {
    let mut loops = us * LOOPS_PER_US;
    while loops > 0 {
        avr_device::asm::nop();
        loops -= 1;
    }
}

pub fn delay_ms(ms: u32) {
    for _ in 0..ms {
        delay_us(1_000);
    }
}
