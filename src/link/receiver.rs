//! IR Receive Framer
//!
//! Runs inside the IR UART receive interrupt. Each invocation drains the
//! hardware FIFO completely and echoes the bytes to the console, framing
//! them into messages delimited by a zero byte. The framing state lives
//! in [`IrReceiver`] and survives across interrupts, so a message split
//! over several FIFO fills is still printed as one.

use super::{RxFifo, SerialWrite};
use crate::activity::{ActivityTimer, Indicator};
use crate::config::MESSAGE_TERMINATOR;

/// Printed on the console before the first byte of every message
pub const MESSAGE_MARKER: &str = "\r\nIR RX message: ";

/// Printed on the console when a message terminator arrives
pub const MESSAGE_END: &str = "\r\n";

/// Framing state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RxState {
    /// Next data byte starts a new message
    #[default]
    AwaitingMessageStart,
    /// Inside a message, waiting for its terminator
    InMessage,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RxState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::AwaitingMessageStart => defmt::write!(f, "AwaitingStart"),
            Self::InMessage => defmt::write!(f, "InMessage"),
        }
    }
}

/// Receive-side context for the IR link
#[derive(Debug, Default)]
pub struct IrReceiver {
    state: RxState,
    messages: u32,
}

impl IrReceiver {
    /// Create a receiver waiting for the start of a message
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RxState::AwaitingMessageStart,
            messages: 0,
        }
    }

    /// Service one receive or receive-timeout interrupt
    ///
    /// Acknowledges the interrupt, pulses the activity indicator and then
    /// drains the FIFO until it reports empty. Returns the number of bytes
    /// drained.
    pub fn on_interrupt<F, W, I>(
        &mut self,
        link: &mut F,
        console: &mut W,
        activity: &ActivityTimer,
        indicator: &mut I,
    ) -> usize
    where
        F: RxFifo,
        W: SerialWrite,
        I: Indicator,
    {
        link.clear_rx_interrupts();
        activity.pulse(indicator);

        let mut drained = 0;
        while let Some(byte) = link.try_read_byte() {
            self.accept(byte, console);
            drained += 1;
        }
        drained
    }

    /// Frame one received byte onto the console
    pub fn accept<W: SerialWrite>(&mut self, byte: u8, console: &mut W) {
        match (self.state, byte) {
            // empty message, framed but never opened
            (RxState::AwaitingMessageStart, MESSAGE_TERMINATOR) => {
                console.write_str(MESSAGE_MARKER);
                console.write_str(MESSAGE_END);
                self.messages = self.messages.wrapping_add(1);
            }
            (RxState::AwaitingMessageStart, data) => {
                console.write_str(MESSAGE_MARKER);
                console.write_byte(data);
                self.state = RxState::InMessage;
            }
            (RxState::InMessage, MESSAGE_TERMINATOR) => {
                console.write_str(MESSAGE_END);
                self.state = RxState::AwaitingMessageStart;
                self.messages = self.messages.wrapping_add(1);
            }
            (RxState::InMessage, data) => console.write_byte(data),
        }
    }

    /// Current framing state
    #[must_use]
    pub const fn state(&self) -> RxState {
        self.state
    }

    /// Number of complete messages seen so far
    #[must_use]
    pub const fn messages(&self) -> u32 {
        self.messages
    }
}
