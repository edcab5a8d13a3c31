//! Shared types used across the IR relay firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use fixed::types::U26F6;

use crate::link::regs::lcr;

/// IR link baud rate
///
/// Only the rates the IR transceiver pair is rated for can be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IrBaudRate {
    /// 300 baud
    B300,
    /// 1200 baud
    B1200,
    /// 2400 baud
    B2400,
    /// 4800 baud
    B4800,
}

impl IrBaudRate {
    /// All supported rates, slowest first
    pub const ALL: [Self; 4] = [Self::B300, Self::B1200, Self::B2400, Self::B4800];

    /// Look up a rate from bits per second, returns None if unsupported
    #[must_use]
    pub const fn from_bps(bps: u32) -> Option<Self> {
        match bps {
            300 => Some(Self::B300),
            1200 => Some(Self::B1200),
            2400 => Some(Self::B2400),
            4800 => Some(Self::B4800),
            _ => None,
        }
    }

    /// Look up a rate from a parsed command argument
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        u32::try_from(value).ok().and_then(Self::from_bps)
    }

    /// Get the rate in bits per second
    #[must_use]
    pub const fn as_bps(self) -> u32 {
        match self {
            Self::B300 => 300,
            Self::B1200 => 1200,
            Self::B2400 => 2400,
            Self::B4800 => 4800,
        }
    }
}

impl fmt::Display for IrBaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bps())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for IrBaudRate {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} baud", self.as_bps());
    }
}

/// Fractional baud divisor for a PL011 UART
///
/// The UART samples at 16x the baud rate, so the divisor is
/// `clock / (16 * baud)` held as an unsigned fixed-point number with
/// 6 fractional bits: the integer part goes to IBRD, the fraction to FBRD.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Divisor(U26F6);

/// Largest integer divisor the IBRD register holds
pub const MAX_IBRD: u32 = 0xFFFF;

impl Divisor {
    /// Compute the divisor for `baud` from a reference clock
    ///
    /// The fraction is rounded to the nearest 1/64 by adding half an LSB
    /// (1/128) before the final shift. Returns None for a zero baud rate or
    /// when the integer part does not fit IBRD.
    #[must_use]
    pub const fn from_clock(clock_hz: u32, baud: u32) -> Option<Self> {
        // divisor in units of 1/128: clock * 8 / baud == clock / (16 * baud) * 128
        let Some(times_128) = (clock_hz as u64 * 8).checked_div(baud as u64) else {
            return None;
        };
        let rounded = (times_128 + 1) >> 1;
        // IBRD is 16 bits wide and zero is not a valid divisor
        let integer = rounded >> 6;
        if integer == 0 || integer > MAX_IBRD as u64 {
            return None;
        }
        Some(Self(U26F6::from_bits(rounded as u32)))
    }

    /// Compute the divisor for a supported IR rate
    #[must_use]
    pub const fn for_rate(clock_hz: u32, rate: IrBaudRate) -> Option<Self> {
        Self::from_clock(clock_hz, rate.as_bps())
    }

    /// Build from raw register values
    #[must_use]
    pub const fn from_registers(integer: u32, fraction: u32) -> Self {
        Self(U26F6::from_bits((integer << 6) | (fraction & 0x3F)))
    }

    /// Integer part (IBRD register value)
    #[must_use]
    pub const fn integer(self) -> u32 {
        self.0.to_bits() >> 6
    }

    /// Fractional part in 1/64 units (FBRD register value)
    #[must_use]
    pub const fn fraction(self) -> u32 {
        self.0.to_bits() & 0x3F
    }

    /// Underlying fixed-point value
    #[must_use]
    pub const fn as_fixed(self) -> U26F6 {
        self.0
    }

    /// Baud rate this divisor actually produces from `clock_hz`
    #[must_use]
    pub fn actual_baud(self, clock_hz: u32) -> u32 {
        // baud = clock * 64 / (16 * bits) = clock * 4 / bits
        let bits = u64::from(self.0.to_bits());
        if bits == 0 {
            return 0;
        }
        ((u64::from(clock_hz) * 4) / bits) as u32
    }
}

impl fmt::Debug for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Divisor({} + {}/64)", self.integer(), self.fraction())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Divisor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}+{}/64", self.integer(), self.fraction());
    }
}

/// Bit timing currently programmed into a link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTiming {
    /// Requested rate
    pub rate: IrBaudRate,
    /// Divisor written to IBRD/FBRD
    pub divisor: Divisor,
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkTiming {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} ({})", self.rate, self.divisor);
    }
}

/// Word length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataBits {
    /// 5 data bits
    Five,
    /// 6 data bits
    Six,
    /// 7 data bits
    Seven,
    /// 8 data bits
    #[default]
    Eight,
}

/// Stop bits configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StopBits {
    /// One stop bit
    #[default]
    One,
    /// Two stop bits
    Two,
}

/// Parity configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parity {
    /// No parity
    #[default]
    None,
    /// Odd parity
    Odd,
    /// Even parity
    Even,
    /// Mark parity
    Mark,
    /// Space parity
    Space,
}

/// Character framing for a UART
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFormat {
    /// Word length
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Stop bits
    pub stop_bits: StopBits,
    /// Hardware FIFOs enabled
    pub fifo: bool,
}

impl LineFormat {
    /// IR link framing: 8 data bits, even parity, 1 stop bit, FIFOs on
    pub const IR_8E1: Self = Self {
        data_bits: DataBits::Eight,
        parity: Parity::Even,
        stop_bits: StopBits::One,
        fifo: true,
    };

    /// Console framing: 8 data bits, no parity, 1 stop bit, FIFOs on
    pub const CONSOLE_8N1: Self = Self {
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
        fifo: true,
    };

    /// Line control register (UARTLCR_H) value for this framing
    #[must_use]
    pub const fn lcr_h(self) -> u32 {
        let wlen = match self.data_bits {
            DataBits::Five => lcr::WLEN_5,
            DataBits::Six => lcr::WLEN_6,
            DataBits::Seven => lcr::WLEN_7,
            DataBits::Eight => lcr::WLEN_8,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Odd => lcr::PEN,
            Parity::Even => lcr::PEN | lcr::EPS,
            Parity::Mark => lcr::PEN | lcr::SPS,
            Parity::Space => lcr::PEN | lcr::EPS | lcr::SPS,
        };
        let stop = match self.stop_bits {
            StopBits::One => 0,
            StopBits::Two => lcr::STP2,
        };
        let fifo = if self.fifo { lcr::FEN } else { 0 };
        wlen | parity | stop | fifo
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::CONSOLE_8N1
    }
}

/// PWM period and compare values for the IR carrier
///
/// The counter runs at the system clock with a divider of 1 and wraps
/// after `top + 1` cycles; the output is high while the count is below
/// `compare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarrierTiming {
    /// Counter wrap value
    pub top: u16,
    /// Channel compare value (50% duty)
    pub compare: u16,
}

impl CarrierTiming {
    /// Compute the timing closest to `carrier_hz` at 50% duty
    #[must_use]
    pub const fn for_frequency(clock_hz: u32, carrier_hz: u32) -> Self {
        let carrier_hz = if carrier_hz == 0 { 1 } else { carrier_hz };
        let period = (clock_hz + carrier_hz / 2) / carrier_hz;
        let period = if period > 65_536 {
            65_536
        } else if period < 2 {
            2
        } else {
            period
        };
        let top = (period - 1) as u16;
        let compare = (period / 2) as u16;
        Self { top, compare }
    }

    /// Frequency actually produced from `clock_hz`
    #[must_use]
    pub const fn actual_frequency(self, clock_hz: u32) -> u32 {
        clock_hz / (self.top as u32 + 1)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CarrierTiming {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "top={} cmp={}", self.top, self.compare);
    }
}
