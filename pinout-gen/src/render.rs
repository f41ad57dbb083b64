//! Renders a board's pin names as an `ecu-pinout` source module.

use std::fmt::Write;

use crate::logic::{PinoutError, PinoutLogic};

pub const HEADER: &str = "// DO NOT EDIT MANUALLY, let automation work hard.";

/// Output file name under the crate's `src/boards` directory.
pub fn module_file_name(board: &str) -> String {
    format!("{board}.rs")
}

pub fn render_board_module(logic: &PinoutLogic) -> Result<String, PinoutError> {
    let names = logic.pin_names()?;
    let outputs = logic.outputs()?;

    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = writeln!(out, "{HEADER}");
    out.push('\n');
    for source in logic.sources() {
        let _ = writeln!(out, "// generated by pinout-gen from {source}");
    }
    out.push('\n');
    out.push_str("use crate::gpio::Gpio;\n");
    out.push_str("use crate::table::{find_duplicate, BoardPinTable, PinNameEntry};\n");
    out.push('\n');

    if names.is_empty() {
        out.push_str("const ENTRIES: &[PinNameEntry] = &[];\n");
    } else {
        out.push_str("const ENTRIES: &[PinNameEntry] = &[\n");
        for (pin, label) in &names {
            let _ = writeln!(out, "    PinNameEntry::new(Gpio::{pin}, {label:?}),");
        }
        out.push_str("];\n");
    }
    out.push('\n');
    out.push_str("const _: () = assert!(find_duplicate(ENTRIES).is_none());\n");
    out.push('\n');
    let _ = writeln!(
        out,
        "pub static PIN_NAMES: BoardPinTable = BoardPinTable::new({:?}, ENTRIES);",
        logic.board()
    );
    out.push('\n');
    out.push_str("/// Low-side outputs first, then high-side, in description order.\n");
    if outputs.is_empty() {
        out.push_str("pub static OUTPUTS: &[Gpio] = &[];\n");
    } else {
        out.push_str("pub static OUTPUTS: &[Gpio] = &[\n");
        for pin in &outputs {
            let _ = writeln!(out, "    Gpio::{pin},");
        }
        out.push_str("];\n");
    }

    log::debug!(
        "{}: rendered {} names, {} outputs",
        logic.board(),
        names.len(),
        outputs.len()
    );
    Ok(out)
}
