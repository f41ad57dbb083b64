// DO NOT EDIT MANUALLY, let automation work hard.

// generated by pinout-gen from s105/connectors/s105.toml

use crate::gpio::Gpio;
use crate::table::{find_duplicate, BoardPinTable, PinNameEntry};

const ENTRIES: &[PinNameEntry] = &[
    PinNameEntry::new(Gpio::B14, "46 - Absorber"),
    PinNameEntry::new(Gpio::B8, "na 8 - TACH"),
    PinNameEntry::new(Gpio::B9, "10 - ECO Out"),
    PinNameEntry::new(Gpio::C6, "29 - EGR"),
    PinNameEntry::new(Gpio::C7, "28 - AFR Heater 2"),
    PinNameEntry::new(Gpio::D0, "na 25 - INJ_7"),
    PinNameEntry::new(Gpio::D10, "7 - INJ_3"),
    PinNameEntry::new(Gpio::D11, "47 - INJ_4"),
    PinNameEntry::new(Gpio::D12, "2 - IGN_2"),
    PinNameEntry::new(Gpio::D13, "5 - IGN_1"),
    PinNameEntry::new(Gpio::D14, "1 - IGN_4"),
    PinNameEntry::new(Gpio::D15, "4 - IGN_3"),
    PinNameEntry::new(Gpio::D2, "70 - Fuel Pump Relay"),
    PinNameEntry::new(Gpio::D6, "na 58 - Fan Relay"),
    PinNameEntry::new(Gpio::D8, "27 - INJ_1"),
    PinNameEntry::new(Gpio::D9, "6 - INJ_2"),
    PinNameEntry::new(Gpio::E0, "9 - Unk Out 1"),
    PinNameEntry::new(Gpio::E10, "na 69 - AC Relay"),
    PinNameEntry::new(Gpio::E12, "50 - AUX Starter Relay"),
    PinNameEntry::new(Gpio::E14, "31 - CEL"),
    PinNameEntry::new(Gpio::E5, "48 - AFR Heater 1"),
    PinNameEntry::new(Gpio::E6, "na 49 - INJ_6"),
    PinNameEntry::new(Gpio::E9, "na 20 - Unk Out 2"),
];

const _: () = assert!(find_duplicate(ENTRIES).is_none());

pub static PIN_NAMES: BoardPinTable = BoardPinTable::new("s105", ENTRIES);

/// Low-side outputs first, then high-side, in description order.
pub static OUTPUTS: &[Gpio] = &[
    Gpio::D9,
    Gpio::D10,
    Gpio::B8,
    Gpio::E0,
    Gpio::B9,
    Gpio::E9,
    Gpio::D0,
    Gpio::D8,
    Gpio::C7,
    Gpio::C6,
    Gpio::E14,
    Gpio::B14,
    Gpio::D11,
    Gpio::E5,
    Gpio::E6,
    Gpio::E12,
    Gpio::D6,
    Gpio::E10,
    Gpio::D2,
    Gpio::D14,
    Gpio::D12,
    Gpio::D15,
    Gpio::D13,
];
