//! Simulated PL011 for host builds
//!
//! Registers are plain memory, the receive FIFO is a queue the test fills,
//! and everything written to DR is captured. Every register write is
//! logged in order so programming sequences can be checked.

use std::collections::VecDeque;
use std::vec::Vec;

use super::regs::{fr, Reg, RegisterBlock};
use super::SerialWrite;

/// Number of modelled registers
const REG_COUNT: usize = 9;

const fn index(reg: Reg) -> usize {
    match reg {
        Reg::Dr => 0,
        Reg::Fr => 1,
        Reg::Ibrd => 2,
        Reg::Fbrd => 3,
        Reg::LcrH => 4,
        Reg::Cr => 5,
        Reg::Ifls => 6,
        Reg::Imsc => 7,
        Reg::Icr => 8,
    }
}

/// In-memory PL011 register file
#[derive(Debug, Default)]
pub struct SimRegisters {
    values: [u32; REG_COUNT],
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    writes: Vec<(Reg, u32)>,
    cleared: u32,
}

impl SimRegisters {
    /// Create a register file with everything reset to zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if they arrived on the line
    pub fn push_rx(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Bytes still waiting in the receive FIFO
    #[must_use]
    pub fn rx_pending(&self) -> usize {
        self.rx.len()
    }

    /// Everything transmitted so far
    #[must_use]
    pub fn tx(&self) -> &[u8] {
        &self.tx
    }

    /// Take the transmitted bytes, leaving the capture empty
    pub fn take_tx(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }

    /// Ordered log of register writes (DR excluded)
    #[must_use]
    pub fn writes(&self) -> &[(Reg, u32)] {
        &self.writes
    }

    /// Forget the write log
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Current value of a register as last written
    #[must_use]
    pub fn value(&self, reg: Reg) -> u32 {
        self.values[index(reg)]
    }

    /// Union of all bits ever written to ICR
    #[must_use]
    pub fn cleared_interrupts(&self) -> u32 {
        self.cleared
    }
}

impl RegisterBlock for SimRegisters {
    fn read(&mut self, reg: Reg) -> u32 {
        match reg {
            Reg::Dr => self.rx.pop_front().map_or(0, u32::from),
            Reg::Fr => {
                let rx = if self.rx.is_empty() { fr::RXFE } else { 0 };
                rx | fr::TXFE
            }
            // write-only
            Reg::Icr => 0,
            other => self.values[index(other)],
        }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        match reg {
            Reg::Dr => self.tx.push((value & 0xFF) as u8),
            Reg::Fr => {}
            Reg::Icr => {
                self.cleared |= value;
                self.writes.push((reg, value));
            }
            other => {
                self.values[index(other)] = value;
                self.writes.push((other, value));
            }
        }
    }
}

impl SerialWrite for Vec<u8> {
    fn write_byte(&mut self, byte: u8) {
        self.push(byte);
    }
}
