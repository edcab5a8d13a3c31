//! IR Link Relay Firmware Library
//!
//! This library provides the core functionality for an RP2040-based
//! console-to-infrared relay. Text commands arrive on the console UART;
//! `send` relays a message over a second UART whose output gates a 38 kHz
//! IR carrier, and `baud` retimes that IR UART while it is live. Messages
//! received over IR are framed and echoed back to the console from the
//! receive interrupt.
//!
//! # Architecture
//!
//! Four layers, top to bottom:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Line Reader  │  Tokenizer  │  Command Dispatcher            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      LINK LAYER                              │
//! │  PL011 Driver  │  Bit Timing  │  IR Receive Framer           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / REGISTER LAYER                       │
//! │  RegisterBlock (RP2040 PAC | host simulation)  │  PWM  │ LED │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │     embassy-rs executor + SysTick and UART interrupts        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **No heap**: all buffers are fixed-capacity (`heapless`)
//! - **Type-driven design**: only supported baud rates are representable
//! - **No unsafe in application code**: All unsafe isolated in the binary
//! - **Sans-I/O protocol**: line reader and dispatcher take bytes and writers,
//!   so the host tests drive them against a simulated register file
//! - **Errors are reported, never retried**: rejected commands return a
//!   `CommandError` and print one notice

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_rp;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// RP2040 backends for the UART registers, carrier PWM, LED and tick.
#[cfg(feature = "embedded")]
pub mod hal;

/// Serial Links
///
/// PL011 register model and driver, bit timing, IR receive framing.
pub mod link;

/// Console Command Protocol
///
/// Line reader, field tokenizer, command dispatcher.
pub mod protocol;

/// Activity indicator countdown
pub mod activity;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Links
    pub use crate::link::pl011::Pl011;
    pub use crate::link::{BitTiming, RxFifo, SerialWrite};

    // Activity
    pub use crate::activity::{ActivityTimer, Indicator};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
