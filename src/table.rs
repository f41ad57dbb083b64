/// Per-board pin name tables and the shared lookup.
///
/// Tables are generated data (see `pinout-gen`), one per board variant,
/// immutable for the life of the program. A pin with no entry simply has no
/// board-specific name.
use thiserror::Error as ThisError;

use crate::gpio::Gpio;

/// One pin and the connector label shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinNameEntry {
    pub pin: Gpio,
    /// Stored verbatim, prefixes such as `"na "` included.
    pub label: &'static str,
}

impl PinNameEntry {
    pub const fn new(pin: Gpio, label: &'static str) -> Self {
        Self { pin, label }
    }
}

/// Immutable pin name table for exactly one board variant.
#[derive(Debug, Clone, Copy)]
pub struct BoardPinTable {
    /// Board identifier the table was generated for
    pub board: &'static str,
    pub entries: &'static [PinNameEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum TableError {
    #[error("pin {pin} appears more than once in the {board} pin table")]
    DuplicatePin { board: &'static str, pin: Gpio },
}

impl BoardPinTable {
    /// Table with no names; every lookup is absent.
    pub const EMPTY: BoardPinTable = BoardPinTable::new("none", &[]);

    pub const fn new(board: &'static str, entries: &'static [PinNameEntry]) -> Self {
        Self { board, entries }
    }

    /// Label for `pin`, or `None` when the board gives it no name.
    pub fn lookup(&self, pin: Gpio) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.pin == pin)
            .map(|entry| entry.label)
    }

    pub fn contains(&self, pin: Gpio) -> bool {
        self.lookup(pin).is_some()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'static, PinNameEntry> {
        self.entries.iter()
    }

    /// Startup check for the no-duplicate invariant.
    ///
    /// Generated tables already assert this at compile time; this covers
    /// tables assembled by hand.
    pub fn validate(&self) -> Result<(), TableError> {
        match find_duplicate(self.entries) {
            Some(pin) => Err(TableError::DuplicatePin {
                board: self.board,
                pin,
            }),
            None => Ok(()),
        }
    }
}

/// Resolve the board-specific label of `pin` in `table`.
///
/// An unmapped pin is a normal outcome, not an error.
pub fn lookup_pin_name(table: &BoardPinTable, pin: Gpio) -> Option<&'static str> {
    table.lookup(pin)
}

/// First pin that appears twice in `entries`, if any.
///
/// `const` so generated tables can reject duplicates at compile time.
pub const fn find_duplicate(entries: &[PinNameEntry]) -> Option<Gpio> {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].pin as u8 == entries[j].pin as u8 {
                return Some(entries[i].pin);
            }
            j += 1;
        }
        i += 1;
    }
    None
}
