/// JSON diagnostic protocol for querying board pin names.
///
/// All messages are newline-delimited JSON (NDJSON).
/// Uses `heapless` types for no_std/no-alloc operation.
use heapless::String;
use serde::{Deserialize, Serialize};

use crate::gpio::Gpio;

/// Messages sent from the ECU to a diagnostic console
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum DiagMessage<'a> {
    /// Display name of one pin
    #[serde(rename = "pin")]
    PinName {
        board: &'static str,
        pin: Gpio,
        /// Omitted when the board gives the pin no name
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<&'a str>,
    },
    /// Active board summary
    #[serde(rename = "board")]
    BoardInfo {
        board: &'static str,
        /// Number of pins with a board-specific name
        named_pins: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        can_tx: Option<Gpio>,
        #[serde(skip_serializing_if = "Option::is_none")]
        can_rx: Option<Gpio>,
        dc_outputs: u8,
        /// Firmware version
        version: &'static str,
    },
    /// Command could not be served
    #[serde(rename = "error")]
    Error { reason: &'static str },
}

/// Commands sent from the diagnostic console.
///
/// Deserialized through [`RawCommand`] in `comm::parse_command()` because
/// `serde_json_core` does not support internally tagged enums (`deserialize_any`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagCommand {
    /// Name of a single pin
    GetPinName { pin: Gpio },
    /// Every named pin of the active board
    ListPins,
    /// Active board summary
    GetBoard,
}

/// Wire format for commands: a flat struct that `serde_json_core` can
/// deserialize without `deserialize_any`. Converted to [`DiagCommand`] in
/// `comm::parse_command()`.
#[derive(Deserialize)]
pub(crate) struct RawCommand {
    pub cmd: String<16>,
    #[serde(default)]
    pub pin: Option<String<12>>,
}

/// Firmware version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum size of a serialized JSON message
pub const MAX_MSG_LEN: usize = 256;
