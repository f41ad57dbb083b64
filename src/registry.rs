/// Pin name registry: resolves display names against the active board.
///
/// The board is fixed at compile time, so the registry every caller gets
/// from [`PinNameRegistry::active`] always borrows the same table and
/// [`board_specific_pin_name`] returns the same answer for a pin for the
/// whole run.
use heapless::String;

use crate::board::{self, BoardId};
use crate::config::BoardConfig;
use crate::gpio::Gpio;
use crate::table::{lookup_pin_name, BoardPinTable};

pub const DESCRIPTION_LEN: usize = 64;

/// Buffer for a formatted pin description such as `"D13 (5 - IGN_1)"`.
pub type PinDescription = String<DESCRIPTION_LEN>;

#[derive(Debug, Clone, Copy)]
pub struct PinNameRegistry {
    board: Option<BoardId>,
    table: &'static BoardPinTable,
}

impl PinNameRegistry {
    pub fn for_board(board: BoardId) -> Self {
        Self {
            board: Some(board),
            table: board.pin_names(),
        }
    }

    /// Registry for the board selected by feature flags. Without a board
    /// feature every lookup is absent.
    pub fn active() -> Self {
        match board::ACTIVE_BOARD {
            Some(board) => Self::for_board(board),
            None => Self {
                board: None,
                table: &BoardPinTable::EMPTY,
            },
        }
    }

    /// Board startup: apply the active board's overrides to `config` and
    /// log which table is in use.
    pub fn init(config: &mut BoardConfig) -> Self {
        let registry = Self::active();
        if let Some(board) = registry.board {
            board.overrides().apply(config);
        }
        registry.log_summary();
        registry
    }

    pub fn board(&self) -> Option<BoardId> {
        self.board
    }

    pub fn board_name(&self) -> &'static str {
        self.board.map_or(board::BOARD_NAME, BoardId::name)
    }

    pub fn table(&self) -> &'static BoardPinTable {
        self.table
    }

    pub fn pin_name(&self, pin: Gpio) -> Option<&'static str> {
        lookup_pin_name(self.table, pin)
    }

    /// `"D13 (5 - IGN_1)"` for named pins, `"D13"` otherwise.
    ///
    /// Labels too long for the buffer are cut short.
    pub fn describe(&self, pin: Gpio) -> PinDescription {
        let mut out = PinDescription::new();
        let _ = out.push_str(pin.name());
        if let Some(label) = self.pin_name(pin) {
            let _ = out.push_str(" (");
            let room = DESCRIPTION_LEN - out.len() - 1;
            let mut end = label.len().min(room);
            while !label.is_char_boundary(end) {
                end -= 1;
            }
            let _ = out.push_str(&label[..end]);
            let _ = out.push(')');
        }
        out
    }

    /// Log a startup summary of the selected table.
    pub fn log_summary(&self) {
        log::info!(
            "Pin names for board {}: {} entries",
            self.board_name(),
            self.table.len()
        );
    }
}

/// Display name of `pin` on the active board, if it has one.
pub fn board_specific_pin_name(pin: Gpio) -> Option<&'static str> {
    PinNameRegistry::active().pin_name(pin)
}
