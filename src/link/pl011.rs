//! PL011 UART Driver
//!
//! Polled transmit, non-blocking receive and live bit-timing changes over
//! any [`RegisterBlock`] backend.

use core::hint::spin_loop;

use super::regs::{cr, dr, fr, ifls, int, Reg, RegisterBlock};
use super::{BitTiming, RxFifo, SerialWrite};
use crate::types::{Divisor, IrBaudRate, LineFormat, LinkTiming};

/// PL011 UART instance
pub struct Pl011<R> {
    regs: R,
    format: LineFormat,
    timing: Option<LinkTiming>,
}

impl<R: RegisterBlock> Pl011<R> {
    /// Wrap a register block; nothing is written until configured
    #[must_use]
    pub const fn new(regs: R, format: LineFormat) -> Self {
        Self {
            regs,
            format,
            timing: None,
        }
    }

    /// Bring the link up at `rate`
    pub fn init(&mut self, rate: IrBaudRate, clock_hz: u32) -> Option<LinkTiming> {
        self.set_baud_rate(rate, clock_hz)
    }

    /// Program divisor and framing with the UART disabled, then re-enable it
    ///
    /// LCR_H must be written after IBRD/FBRD for the divisor to latch, and
    /// the framing is written on every call so a rate change never drops it.
    pub fn configure(&mut self, divisor: Divisor) {
        self.regs.write(Reg::Cr, 0);
        self.regs.write(Reg::Ibrd, divisor.integer());
        self.regs.write(Reg::Fbrd, divisor.fraction());
        self.regs.write(Reg::LcrH, self.format.lcr_h());
        self.regs.write(Reg::Cr, cr::UARTEN | cr::TXE | cr::RXE);
    }

    /// Interrupt on receive FIFO 1/8 full or receive timeout
    pub fn enable_rx_interrupts(&mut self) {
        self.regs.modify(Reg::Cr, |v| v & !cr::UARTEN);
        self.regs
            .modify(Reg::Ifls, |v| (v & !ifls::RX_MASK) | ifls::RX_1_8);
        self.regs.write(Reg::Icr, int::RX | int::RT);
        self.regs.modify(Reg::Imsc, |v| v | int::RX | int::RT);
        self.regs.modify(Reg::Cr, |v| v | cr::UARTEN);
    }

    /// Mask the receive interrupts again
    pub fn disable_rx_interrupts(&mut self) {
        self.regs.modify(Reg::Imsc, |v| v & !(int::RX | int::RT));
    }

    /// Block until a byte arrives
    pub fn read_byte(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.try_read_byte() {
                return byte;
            }
            spin_loop();
        }
    }

    /// Wait until the transmitter has shifted out everything
    pub fn flush(&mut self) {
        while self.regs.read(Reg::Fr) & fr::BUSY != 0 {
            spin_loop();
        }
    }

    /// Framing this link is programmed with
    #[must_use]
    pub const fn format(&self) -> LineFormat {
        self.format
    }

    /// Borrow the register backend
    #[must_use]
    pub const fn registers(&self) -> &R {
        &self.regs
    }

    /// Mutably borrow the register backend
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Consume the driver and return the register backend
    pub fn into_inner(self) -> R {
        self.regs
    }
}

impl<R: RegisterBlock> SerialWrite for Pl011<R> {
    fn write_byte(&mut self, byte: u8) {
        while self.regs.read(Reg::Fr) & fr::TXFF != 0 {
            spin_loop();
        }
        self.regs.write(Reg::Dr, u32::from(byte));
    }
}

impl<R: RegisterBlock> RxFifo for Pl011<R> {
    fn rx_empty(&mut self) -> bool {
        self.regs.read(Reg::Fr) & fr::RXFE != 0
    }

    fn try_read_byte(&mut self) -> Option<u8> {
        if self.rx_empty() {
            None
        } else {
            Some((self.regs.read(Reg::Dr) & dr::DATA_MASK) as u8)
        }
    }

    fn clear_rx_interrupts(&mut self) {
        self.regs.write(Reg::Icr, int::RX | int::RT);
    }
}

impl<R: RegisterBlock> BitTiming for Pl011<R> {
    fn set_baud_rate(&mut self, rate: IrBaudRate, clock_hz: u32) -> Option<LinkTiming> {
        let divisor = Divisor::for_rate(clock_hz, rate)?;
        self.configure(divisor);

        let timing = LinkTiming { rate, divisor };
        self.timing = Some(timing);

        #[cfg(feature = "embedded")]
        defmt::debug!("IR link reprogrammed: {}", timing);

        Some(timing)
    }

    fn timing(&self) -> Option<LinkTiming> {
        self.timing
    }
}
