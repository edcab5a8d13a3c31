//! Hardware Abstraction Layer
//!
//! Provides safe abstractions over RP2040 peripherals.
//! This module isolates hardware-specific code; everything above it talks
//! to the UARTs through [`crate::link::regs::RegisterBlock`].

pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;
