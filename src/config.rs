//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the IR relay hardware.
//! Clock frequencies, buffer capacities, pin mappings and interrupt
//! assignments are centralized here.

use crate::types::{CarrierTiming, IrBaudRate};

/// System clock frequency (RP2040 default `clk_sys`, 125 MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// UART reference clock (`clk_peri`, sourced from `clk_sys`)
pub const UART_CLOCK_HZ: u32 = SYSTEM_CLOCK_HZ;

/// Console (primary link) baud rate
pub const CONSOLE_BAUD: u32 = 115_200;

/// IR link rate applied at startup
pub const DEFAULT_IR_BAUD: IrBaudRate = IrBaudRate::B1200;

/// Maximum number of visible characters on one command line
pub const MAX_CHARS: usize = 80;

/// Maximum number of fields recorded per command line
pub const MAX_FIELDS: usize = 5;

/// Maximum `send` payload length in bytes (terminator excluded)
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Byte that ends one application message on the IR link
pub const MESSAGE_TERMINATOR: u8 = 0;

/// How long the activity LED stays lit after an IR receive, in milliseconds
pub const ACTIVITY_HOLD_MS: u32 = 500;

/// Period of the activity countdown tick in milliseconds
pub const TICK_PERIOD_MS: u32 = 1;

/// SysTick reload value for one tick period
pub const SYSTICK_RELOAD: u32 = SYSTEM_CLOCK_HZ / 1000 * TICK_PERIOD_MS - 1;

/// IR carrier frequency (38 kHz for standard IR receiver modules)
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments (Raspberry Pi Pico)

    /// Console UART0 TX
    pub const CONSOLE_TX: &str = "GP0";

    /// Console UART0 RX
    pub const CONSOLE_RX: &str = "GP1";

    /// IR carrier PWM output (slice 1, channel A)
    pub const CARRIER_OUT: &str = "GP2";

    /// IR UART1 TX (into the modulator gate)
    pub const IR_TX: &str = "GP4";

    /// IR UART1 RX (from the demodulating receiver)
    pub const IR_RX: &str = "GP5";

    /// Activity LED (on-board)
    pub const ACTIVITY_LED: &str = "GP25";
}

/// Interrupt assignments
pub mod irq {
    //! NVIC priorities

    /// IR UART receive interrupt priority (highest)
    pub const IR_RX_PRIORITY: u8 = 0;
}

/// Build the carrier timing for the configured frequency
#[must_use]
pub const fn carrier_timing() -> CarrierTiming {
    CarrierTiming::for_frequency(SYSTEM_CLOCK_HZ, CARRIER_FREQUENCY_HZ)
}
