//! PL011 register model
//!
//! The smallest capability the UART drivers need from a backend: read and
//! write one 32-bit register. Real silicon maps these onto MMIO, the host
//! simulation onto plain memory and FIFOs.

/// PL011 registers used by the drivers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    /// Data register (UARTDR)
    Dr,
    /// Flag register (UARTFR)
    Fr,
    /// Integer baud divisor (UARTIBRD)
    Ibrd,
    /// Fractional baud divisor (UARTFBRD)
    Fbrd,
    /// Line control (UARTLCR_H)
    LcrH,
    /// Control (UARTCR)
    Cr,
    /// FIFO level select (UARTIFLS)
    Ifls,
    /// Interrupt mask set/clear (UARTIMSC)
    Imsc,
    /// Interrupt clear (UARTICR)
    Icr,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Reg {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dr => defmt::write!(f, "DR"),
            Self::Fr => defmt::write!(f, "FR"),
            Self::Ibrd => defmt::write!(f, "IBRD"),
            Self::Fbrd => defmt::write!(f, "FBRD"),
            Self::LcrH => defmt::write!(f, "LCR_H"),
            Self::Cr => defmt::write!(f, "CR"),
            Self::Ifls => defmt::write!(f, "IFLS"),
            Self::Imsc => defmt::write!(f, "IMSC"),
            Self::Icr => defmt::write!(f, "ICR"),
        }
    }
}

/// Register-level access to one PL011 instance
///
/// `read` takes `&mut self` because reading DR pops the receive FIFO.
pub trait RegisterBlock {
    /// Read a register
    fn read(&mut self, reg: Reg) -> u32;

    /// Write a register
    fn write(&mut self, reg: Reg, value: u32);

    /// Read-modify-write a register
    fn modify(&mut self, reg: Reg, f: impl FnOnce(u32) -> u32) {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

/// Data register bits
pub mod dr {
    /// Received or transmitted character
    pub const DATA_MASK: u32 = 0xFF;
}

/// Flag register bits
pub mod fr {
    /// UART busy transmitting
    pub const BUSY: u32 = 1 << 3;
    /// Receive FIFO empty
    pub const RXFE: u32 = 1 << 4;
    /// Transmit FIFO full
    pub const TXFF: u32 = 1 << 5;
    /// Transmit FIFO empty
    pub const TXFE: u32 = 1 << 7;
}

/// Line control register bits
pub mod lcr {
    /// Parity enable
    pub const PEN: u32 = 1 << 1;
    /// Even parity select
    pub const EPS: u32 = 1 << 2;
    /// Two stop bits
    pub const STP2: u32 = 1 << 3;
    /// FIFO enable
    pub const FEN: u32 = 1 << 4;
    /// 5-bit words
    pub const WLEN_5: u32 = 0b00 << 5;
    /// 6-bit words
    pub const WLEN_6: u32 = 0b01 << 5;
    /// 7-bit words
    pub const WLEN_7: u32 = 0b10 << 5;
    /// 8-bit words
    pub const WLEN_8: u32 = 0b11 << 5;
    /// Stick parity select
    pub const SPS: u32 = 1 << 7;
}

/// Control register bits
pub mod cr {
    /// UART enable
    pub const UARTEN: u32 = 1 << 0;
    /// Transmit enable
    pub const TXE: u32 = 1 << 8;
    /// Receive enable
    pub const RXE: u32 = 1 << 9;
}

/// FIFO level select bits
pub mod ifls {
    /// Receive interrupt level field
    pub const RX_MASK: u32 = 0b111 << 3;
    /// Receive FIFO becomes >= 1/8 full
    pub const RX_1_8: u32 = 0b000 << 3;
}

/// Interrupt mask and clear bits (same layout in IMSC, MIS and ICR)
pub mod int {
    /// Receive interrupt
    pub const RX: u32 = 1 << 4;
    /// Receive timeout interrupt
    pub const RT: u32 = 1 << 6;
}
