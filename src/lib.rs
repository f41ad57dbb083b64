//! Board pin-name registry for engine control unit firmware.
//!
//! Maps physical pin identifiers ([`gpio::Gpio`]) to the connector labels a
//! board's harness uses, one generated table per board variant. A pin with no
//! entry has no board-specific name; that is a normal answer, not an error.
//!
//! The crate is organized in three layers:
//! - **Data**: `gpio`, `table`, `boards`: the identifier enum, the lookup and
//!   the generated tables (`boards/*` is written by `pinout-gen` from the
//!   connector descriptions under `boards/`).
//! - **Selection**: `board`, `config`, `registry`: which table is active,
//!   plus the static CAN-pin and feature overrides each board applies.
//! - **Diagnostics**: `protocol`, `comm`: NDJSON queries for pin names.
//!
//! Everything is `no_std`, no allocator.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod boards;
pub mod comm;
pub mod config;
pub mod gpio;
pub mod protocol;
pub mod registry;
pub mod table;

pub use gpio::Gpio;
pub use registry::{board_specific_pin_name, PinNameRegistry};
pub use table::{lookup_pin_name, BoardPinTable, PinNameEntry};
