//! Command Dispatcher
//!
//! Interprets console lines and drives the IR link:
//!
//! - `send <message>` relays the rest of the line, spaces included, as one
//!   zero-terminated IR message (at most 64 bytes)
//! - `baud <rate>` reprograms the IR link to 300, 1200, 2400 or 4800 baud
//!
//! Anything else gets a single `Invalid command` notice.

use core::fmt;

use heapless::String;

use super::fields::ParsedCommand;
use super::line::Line;
use crate::config::{MAX_CHARS, MAX_PAYLOAD_LEN, MESSAGE_TERMINATOR};
use crate::link::{BitTiming, SerialWrite};
use crate::types::IrBaudRate;

/// Name of the relay command
pub const SEND: &str = "send";

/// Name of the rate change command
pub const BAUD: &str = "baud";

/// Notice for anything that is not a valid command
pub const INVALID_COMMAND: &str = "\r\nInvalid command\r\n";

/// Response buffer size (fits a full echoed line)
pub const RESPONSE_LEN: usize = MAX_CHARS + 32;

/// Successful command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Message relayed over IR (payload length, terminator excluded)
    Sent {
        /// Payload bytes written
        len: usize,
    },
    /// IR link reprogrammed
    BaudChanged(IrBaudRate),
}

#[cfg(feature = "embedded")]
impl defmt::Format for Reply {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Sent { len } => defmt::write!(f, "Sent({})", len),
            Self::BaudChanged(rate) => defmt::write!(f, "Baud({})", rate),
        }
    }
}

/// Why a line was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Not a known command, or too few arguments
    Unrecognized,
    /// `send` payload over the limit
    PayloadTooLong {
        /// Payload length found
        len: usize,
    },
    /// `baud` value not in the supported set
    UnsupportedRate(i32),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "unrecognized command"),
            Self::PayloadTooLong { len } => {
                write!(f, "payload of {len} bytes exceeds {MAX_PAYLOAD_LEN}")
            }
            Self::UnsupportedRate(rate) => write!(f, "unsupported rate {rate}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for CommandError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unrecognized => defmt::write!(f, "Unrecognized"),
            Self::PayloadTooLong { len } => defmt::write!(f, "PayloadTooLong({})", len),
            Self::UnsupportedRate(rate) => defmt::write!(f, "UnsupportedRate({})", rate),
        }
    }
}

/// Console response formatter
pub struct Response {
    buffer: String<RESPONSE_LEN>,
}

impl Response {
    /// Create a new response formatter
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Format the rate change confirmation, echoing the rate as typed
    pub fn baud_changed(&mut self, typed: &str) {
        self.buffer.clear();
        let _ = core::fmt::write(
            &mut self.buffer,
            format_args!("\r\nIR baud rate set to {typed}\r\n"),
        );
    }

    /// Format the current rate line of the startup banner
    pub fn current_rate(&mut self, rate: IrBaudRate) {
        self.buffer.clear();
        let _ = core::fmt::write(
            &mut self.buffer,
            format_args!("IR baud rate set to {rate}\r\n"),
        );
    }

    /// Format the usage line for the rate argument
    pub fn rate_usage(&mut self) {
        self.buffer.clear();
        let _ = self.buffer.push_str("<rate> =");
        for (i, rate) in IrBaudRate::ALL.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            let _ = core::fmt::write(&mut self.buffer, format_args!("{sep}{rate}"));
        }
        let _ = self.buffer.push_str("\r\n\r\n");
    }

    /// Format the usage line for the message argument
    pub fn message_usage(&mut self) {
        self.buffer.clear();
        let _ = core::fmt::write(
            &mut self.buffer,
            format_args!("<message> limited to {MAX_PAYLOAD_LEN} characters\r\n\r\n"),
        );
    }

    /// Get the response string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the response bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the usage banner shown at startup
pub fn write_banner<W: SerialWrite>(console: &mut W, rate: IrBaudRate) {
    let mut response = Response::new();

    response.current_rate(rate);
    console.write_str(response.as_str());
    console.write_str("Command: baud <rate>\r\n");
    response.rate_usage();
    console.write_str(response.as_str());

    console.write_str("Command: send <message>\r\n");
    response.message_usage();
    console.write_str(response.as_str());
}

/// Executes console commands against the IR link
pub struct Dispatcher<L> {
    link: L,
    clock_hz: u32,
}

impl<L: SerialWrite + BitTiming> Dispatcher<L> {
    /// Create a dispatcher for `link`, whose UART runs from `clock_hz`
    #[must_use]
    pub const fn new(link: L, clock_hz: u32) -> Self {
        Self { link, clock_hz }
    }

    /// Interpret one line
    ///
    /// Both commands are checked on every line. If neither succeeds the
    /// invalid command notice is written to `console` once.
    pub fn handle_line<W: SerialWrite>(
        &mut self,
        line: &Line,
        console: &mut W,
    ) -> Result<Reply, CommandError> {
        let parsed = ParsedCommand::parse(line.as_bytes());
        let mut outcome = Err(CommandError::Unrecognized);

        if parsed.is_command(SEND, 1) {
            outcome = self.send(line, &parsed);
        }

        if parsed.is_command(BAUD, 1) {
            outcome = self.baud(&parsed, console);
        }

        match &outcome {
            Ok(_reply) => {
                #[cfg(feature = "embedded")]
                defmt::info!("command ok: {}", _reply);
            }
            Err(_err) => {
                #[cfg(feature = "embedded")]
                defmt::warn!("command rejected: {}", _err);
                console.write_str(INVALID_COMMAND);
            }
        }
        outcome
    }

    /// Relay the untokenized remainder of the line from field 1 on
    fn send(&mut self, line: &Line, parsed: &ParsedCommand) -> Result<Reply, CommandError> {
        let payload = parsed
            .field(1)
            .and_then(|field| line.as_bytes().get(field.offset..))
            .ok_or(CommandError::Unrecognized)?;

        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(CommandError::PayloadTooLong { len: payload.len() });
        }

        #[cfg(feature = "embedded")]
        defmt::debug!("IR TX: {=[u8]:a}", payload);

        self.link.write_bytes(payload);
        self.link.write_byte(MESSAGE_TERMINATOR);
        Ok(Reply::Sent { len: payload.len() })
    }

    /// Reprogram the IR link if the requested rate is supported
    fn baud<W: SerialWrite>(
        &mut self,
        parsed: &ParsedCommand,
        console: &mut W,
    ) -> Result<Reply, CommandError> {
        let value = parsed.field_as_integer(1);
        let rate = IrBaudRate::from_value(value).ok_or(CommandError::UnsupportedRate(value))?;

        self.link
            .set_baud_rate(rate, self.clock_hz)
            .ok_or(CommandError::UnsupportedRate(value))?;

        let mut response = Response::new();
        response.baud_changed(parsed.field_as_text(1).unwrap_or_default());
        console.write_str(response.as_str());

        Ok(Reply::BaudChanged(rate))
    }

    /// Borrow the IR link
    #[must_use]
    pub const fn link(&self) -> &L {
        &self.link
    }
}
