//! RP2040 UART Backend
//!
//! Maps the PL011 register model onto the UART0/UART1 blocks through the
//! peripheral access crate. Pin muxing and peripheral reset are left to
//! `embassy_rp::uart`; this layer only touches the UART registers.

use embassy_futures::yield_now;
use embassy_rp::pac;
use embassy_rp::pac::uart::regs;

use crate::link::regs::{Reg, RegisterBlock};
use crate::link::RxFifo;

/// Register handle for one RP2040 UART
///
/// Only names the instance; the PAC block is looked up on every access so
/// the handle can live in interrupt-shared statics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpUart {
    /// UART0, the console link
    Console,
    /// UART1, the IR link
    Ir,
}

impl RpUart {
    /// UART0, the console link
    #[must_use]
    pub const fn console() -> Self {
        Self::Console
    }

    /// UART1, the IR link
    #[must_use]
    pub const fn ir() -> Self {
        Self::Ir
    }

    fn block(self) -> pac::uart::Uart {
        match self {
            Self::Console => pac::UART0,
            Self::Ir => pac::UART1,
        }
    }
}

impl RegisterBlock for RpUart {
    fn read(&mut self, reg: Reg) -> u32 {
        let uart = self.block();
        match reg {
            Reg::Dr => uart.uartdr().read().0,
            Reg::Fr => uart.uartfr().read().0,
            Reg::Ibrd => uart.uartibrd().read().0,
            Reg::Fbrd => uart.uartfbrd().read().0,
            Reg::LcrH => uart.uartlcr_h().read().0,
            Reg::Cr => uart.uartcr().read().0,
            Reg::Ifls => uart.uartifls().read().0,
            Reg::Imsc => uart.uartimsc().read().0,
            // write-only
            Reg::Icr => 0,
        }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        let uart = self.block();
        match reg {
            Reg::Dr => uart.uartdr().write_value(regs::Uartdr(value)),
            // read-only
            Reg::Fr => {}
            Reg::Ibrd => uart.uartibrd().write_value(regs::Uartibrd(value)),
            Reg::Fbrd => uart.uartfbrd().write_value(regs::Uartfbrd(value)),
            Reg::LcrH => uart.uartlcr_h().write_value(regs::UartlcrH(value)),
            Reg::Cr => uart.uartcr().write_value(regs::Uartcr(value)),
            Reg::Ifls => uart.uartifls().write_value(regs::Uartifls(value)),
            Reg::Imsc => uart.uartimsc().write_value(regs::Uartimsc(value)),
            Reg::Icr => uart.uarticr().write_value(regs::Uarticr(value)),
        }
    }
}

/// Wait for the next byte on `link`
///
/// Polls the FIFO and yields to the executor while it is empty. Interrupts
/// keep firing during the wait.
pub async fn next_byte<F: RxFifo>(link: &mut F) -> u8 {
    loop {
        if let Some(byte) = link.try_read_byte() {
            return byte;
        }
        yield_now().await;
    }
}
