//! Carrier PWM
//!
//! The 38 kHz IR carrier is a free-running PWM channel. It is configured
//! once at startup and never touched again; the IR UART's TX line gates it
//! externally.

use embassy_rp::pwm::Config;

use crate::types::CarrierTiming;

/// PWM slice configuration for the carrier
///
/// Integer divider of 1, so the counter runs at the system clock.
#[must_use]
pub fn carrier_config(timing: CarrierTiming) -> Config {
    let mut config = Config::default();
    config.top = timing.top;
    config.compare_a = timing.compare;
    config.enable = true;
    config
}
