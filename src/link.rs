//! Serial Links
//!
//! Both the console (primary link) and the IR link (secondary link) are
//! PL011 UARTs. This module holds the register model, the driver, the
//! interrupt-level receive framer and a host simulation backend.

pub mod pl011;
pub mod receiver;
pub mod regs;
#[cfg(feature = "std")]
pub mod sim;

use crate::types::{IrBaudRate, LinkTiming};

/// Blocking byte output
pub trait SerialWrite {
    /// Write one byte, waiting for FIFO space if needed
    fn write_byte(&mut self, byte: u8);

    /// Write a byte slice
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Write a string
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

/// Non-blocking access to a receive FIFO
pub trait RxFifo {
    /// Check whether the receive FIFO is empty
    fn rx_empty(&mut self) -> bool;

    /// Pop one byte if available
    fn try_read_byte(&mut self) -> Option<u8>;

    /// Acknowledge the receive and receive-timeout interrupts
    fn clear_rx_interrupts(&mut self);
}

/// Runtime bit-timing control
pub trait BitTiming {
    /// Reprogram the link for `rate` from a reference clock of `clock_hz`
    ///
    /// Returns the new timing, or None if no divisor exists for the request
    /// (in which case the link is left untouched).
    fn set_baud_rate(&mut self, rate: IrBaudRate, clock_hz: u32) -> Option<LinkTiming>;

    /// Timing most recently programmed, if any
    fn timing(&self) -> Option<LinkTiming>;
}
