/// Diagnostic transport helpers: NDJSON serialization, command parsing and
/// dispatch, and a byte-wise line reader.
///
/// Transport-agnostic: the platform feeds received bytes into a
/// [`LineReader`] and writes whatever [`handle_command`] emits.
use thiserror::Error as ThisError;

use crate::board::BoardId;
use crate::gpio::Gpio;
use crate::protocol::{DiagCommand, DiagMessage, RawCommand, MAX_MSG_LEN, VERSION};
use crate::registry::PinNameRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("malformed command")]
    Malformed,
    #[error("unknown command")]
    UnknownCommand,
    #[error("missing pin")]
    MissingPin,
    #[error("unknown pin")]
    UnknownPin,
}

impl CommandError {
    /// Short reason reported back in an error message.
    pub fn reason(&self) -> &'static str {
        match self {
            CommandError::Empty => "empty command",
            CommandError::Malformed => "malformed command",
            CommandError::UnknownCommand => "unknown command",
            CommandError::MissingPin => "missing pin",
            CommandError::UnknownPin => "unknown pin",
        }
    }
}

/// Serialize a DiagMessage to JSON bytes and write to the output buffer.
/// Returns the number of bytes written, or None if serialization failed.
pub fn serialize_message(msg: &DiagMessage, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(msg, buf) {
        Ok(len) => {
            // Append newline for NDJSON
            if len < buf.len() {
                buf[len] = b'\n';
                Some(len + 1)
            } else {
                Some(len)
            }
        }
        Err(_) => None,
    }
}

/// Deserialize a DiagCommand from a JSON byte slice.
pub fn parse_command(data: &[u8]) -> Result<DiagCommand, CommandError> {
    // Strip trailing newline/whitespace
    let trimmed = data.trim_ascii_end();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }
    let (raw, _) = serde_json_core::from_slice::<RawCommand>(trimmed)
        .map_err(|_| CommandError::Malformed)?;

    match raw.cmd.as_str() {
        "pin_name" => {
            let pin = raw.pin.ok_or(CommandError::MissingPin)?;
            let pin = pin
                .parse::<Gpio>()
                .map_err(|_| CommandError::UnknownPin)?;
            Ok(DiagCommand::GetPinName { pin })
        }
        "list_pins" => Ok(DiagCommand::ListPins),
        "board" => Ok(DiagCommand::GetBoard),
        _ => Err(CommandError::UnknownCommand),
    }
}

/// Serve a command against `registry`, passing each response to `emit`.
pub fn handle_command<F>(cmd: DiagCommand, registry: &PinNameRegistry, mut emit: F)
where
    F: FnMut(&DiagMessage),
{
    let board = registry.board_name();
    match cmd {
        DiagCommand::GetPinName { pin } => {
            emit(&DiagMessage::PinName {
                board,
                pin,
                label: registry.pin_name(pin),
            });
        }
        DiagCommand::ListPins => {
            for entry in registry.table().iter() {
                emit(&DiagMessage::PinName {
                    board,
                    pin: entry.pin,
                    label: Some(entry.label),
                });
            }
        }
        DiagCommand::GetBoard => {
            let overrides = registry.board().map(BoardId::overrides);
            emit(&DiagMessage::BoardInfo {
                board,
                named_pins: registry.table().len() as u16,
                can_tx: overrides.and_then(|o| o.can_tx_pin),
                can_rx: overrides.and_then(|o| o.can_rx_pin),
                dc_outputs: overrides.map_or(0, |o| o.dc_outputs),
                version: VERSION,
            });
        }
    }
}

/// Parse one received line and serve it, reporting parse failures as an
/// error message.
pub fn serve_line<F>(line: &[u8], registry: &PinNameRegistry, mut emit: F)
where
    F: FnMut(&DiagMessage),
{
    match parse_command(line) {
        Ok(cmd) => handle_command(cmd, registry, emit),
        Err(CommandError::Empty) => {}
        Err(err) => {
            log::warn!("Rejected diagnostic command: {}", err);
            emit(&DiagMessage::Error {
                reason: err.reason(),
            });
        }
    }
}

// ── NDJSON line reader ─────────────────────────────────────────────────

/// NDJSON reader state machine.
/// Accumulates bytes until a newline is found, then yields the line.
pub struct LineReader {
    buf: [u8; MAX_MSG_LEN],
    pos: usize,
    overflowed: bool,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_MSG_LEN],
            pos: 0,
            overflowed: false,
        }
    }

    /// Feed a byte into the reader. Returns a complete line (without newline)
    /// when one is detected. A line longer than the buffer is dropped whole.
    pub fn feed(&mut self, byte: u8) -> Option<&[u8]> {
        if byte == b'\n' || byte == b'\r' {
            let len = self.pos;
            let overflowed = self.overflowed;
            self.pos = 0;
            self.overflowed = false;
            if len > 0 && !overflowed {
                Some(&self.buf[..len])
            } else {
                None
            }
        } else if self.overflowed {
            None
        } else if self.pos < self.buf.len() {
            self.buf[self.pos] = byte;
            self.pos += 1;
            None
        } else {
            // Overflow, discard until the next newline
            self.pos = 0;
            self.overflowed = true;
            None
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(cmd: DiagCommand, registry: &PinNameRegistry) -> heapless::Vec<heapless::String<128>, 32> {
        let mut out = heapless::Vec::new();
        handle_command(cmd, registry, |msg| {
            let mut buf = [0u8; MAX_MSG_LEN];
            let len = serialize_message(msg, &mut buf).unwrap();
            let text = core::str::from_utf8(&buf[..len]).unwrap();
            out.push(heapless::String::try_from(text).unwrap()).unwrap();
        });
        out
    }

    #[test]
    fn parse_pin_name_command() {
        assert_eq!(
            parse_command(br#"{"cmd":"pin_name","pin":"D13"}"#),
            Ok(DiagCommand::GetPinName { pin: Gpio::D13 })
        );
        assert_eq!(
            parse_command(b"{\"cmd\":\"pin_name\",\"pin\":\"PE10\"}\r\n"),
            Ok(DiagCommand::GetPinName { pin: Gpio::E10 })
        );
    }

    #[test]
    fn parse_other_commands() {
        assert_eq!(parse_command(br#"{"cmd":"list_pins"}"#), Ok(DiagCommand::ListPins));
        assert_eq!(parse_command(br#"{"cmd":"board"} "#), Ok(DiagCommand::GetBoard));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_command(b""), Err(CommandError::Empty));
        assert_eq!(parse_command(b" \r\n"), Err(CommandError::Empty));
        assert_eq!(parse_command(b"not json"), Err(CommandError::Malformed));
        assert_eq!(parse_command(br#"{"cmd":"reboot"}"#), Err(CommandError::UnknownCommand));
        assert_eq!(parse_command(br#"{"cmd":"pin_name"}"#), Err(CommandError::MissingPin));
        assert_eq!(
            parse_command(br#"{"cmd":"pin_name","pin":"Z99"}"#),
            Err(CommandError::UnknownPin)
        );
    }

    #[test]
    fn serialize_appends_newline() {
        let msg = DiagMessage::Error { reason: "x" };
        let mut buf = [0u8; 64];
        let len = serialize_message(&msg, &mut buf).unwrap();
        assert_eq!(buf[len - 1], b'\n');
    }

    #[test]
    fn serialize_fails_when_buffer_too_small() {
        let msg = DiagMessage::Error {
            reason: "a reason that will not fit",
        };
        let mut buf = [0u8; 8];
        assert_eq!(serialize_message(&msg, &mut buf), None);
    }

    #[test]
    fn handle_pin_name() {
        let registry = PinNameRegistry::for_board(BoardId::S105);
        let out = collect(DiagCommand::GetPinName { pin: Gpio::D13 }, &registry);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].as_str(),
            "{\"type\":\"pin\",\"board\":\"s105\",\"pin\":\"D13\",\"label\":\"5 - IGN_1\"}\n"
        );

        let out = collect(DiagCommand::GetPinName { pin: Gpio::B13 }, &registry);
        assert!(!out[0].contains("label"));
    }

    #[test]
    fn handle_list_pins_emits_every_entry() {
        let registry = PinNameRegistry::for_board(BoardId::Uaefi121);
        let out = collect(DiagCommand::ListPins, &registry);
        assert_eq!(out.len(), registry.table().len());
        assert!(out.iter().any(|line| line.contains(r#""label":"C5 - Main Relay""#)));
    }

    #[test]
    fn handle_board_info() {
        let registry = PinNameRegistry::for_board(BoardId::Uaefi121);
        let out = collect(DiagCommand::GetBoard, &registry);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains(r#""board":"uaefi121""#));
        assert!(out[0].contains(r#""named_pins":8"#));
        assert!(out[0].contains(r#""can_tx":"B13""#));
        assert!(out[0].contains(r#""dc_outputs":2"#));
    }

    #[test]
    fn serve_line_reports_errors() {
        let registry = PinNameRegistry::for_board(BoardId::S105);
        let mut reasons: heapless::Vec<&'static str, 4> = heapless::Vec::new();
        serve_line(br#"{"cmd":"pin_name","pin":"Q1"}"#, &registry, |msg| {
            if let DiagMessage::Error { reason } = msg {
                reasons.push(*reason).unwrap();
            }
        });
        serve_line(b"", &registry, |_| panic!("empty line must not answer"));
        assert_eq!(reasons.as_slice(), &["unknown pin"]);
    }

    #[test]
    fn line_reader_splits_lines() {
        let mut reader = LineReader::new();
        let mut lines = 0;
        for &byte in b"{\"cmd\":\"board\"}\n\r\n{\"cmd\":\"list_pins\"}\r" {
            if let Some(line) = reader.feed(byte) {
                assert!(parse_command(line).is_ok());
                lines += 1;
            }
        }
        assert_eq!(lines, 2);
    }

    #[test]
    fn line_reader_drops_overlong_line() {
        let mut reader = LineReader::new();
        for _ in 0..MAX_MSG_LEN + 10 {
            assert_eq!(reader.feed(b'x'), None);
        }
        assert_eq!(reader.feed(b'\n'), None);

        // Next line is read normally
        for &byte in br#"{"cmd":"board"}"# {
            assert_eq!(reader.feed(byte), None);
        }
        assert_eq!(reader.feed(b'\n'), Some(&br#"{"cmd":"board"}"#[..]));
    }
}
