// DO NOT EDIT MANUALLY, let automation work hard.

// generated by pinout-gen from uaefi121/connectors/main.toml

use crate::gpio::Gpio;
use crate::table::{find_duplicate, BoardPinTable, PinNameEntry};

const ENTRIES: &[PinNameEntry] = &[
    PinNameEntry::new(Gpio::C13, "B1 - IGN_1"),
    PinNameEntry::new(Gpio::D10, "A4 - INJ_4"),
    PinNameEntry::new(Gpio::D11, "A3 - INJ_3"),
    PinNameEntry::new(Gpio::E11, "B8 - VSS"),
    PinNameEntry::new(Gpio::E5, "B2 - IGN_2"),
    PinNameEntry::new(Gpio::G14, "C5 - Main Relay"),
    PinNameEntry::new(Gpio::G7, "A1 - INJ_1"),
    PinNameEntry::new(Gpio::G8, "A2 - INJ_2"),
];

const _: () = assert!(find_duplicate(ENTRIES).is_none());

pub static PIN_NAMES: BoardPinTable = BoardPinTable::new("uaefi121", ENTRIES);

/// Low-side outputs first, then high-side, in description order.
pub static OUTPUTS: &[Gpio] = &[
    Gpio::G7,
    Gpio::G8,
    Gpio::D11,
    Gpio::D10,
    Gpio::G14,
    Gpio::C13,
    Gpio::E5,
];
