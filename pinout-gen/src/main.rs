//! pinout-gen: writes `ecu-pinout` board tables from connector descriptions.

mod description;
mod inputs;
mod logic;
mod render;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use ecu_pinout::board::BoardId;
use tracing_subscriber::EnvFilter;

use inputs::FileSystemBoardInputs;
use logic::PinoutLogic;
use render::{module_file_name, render_board_module};

/// Board pin name table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Boards to generate, e.g. `s105 uaefi121`
    #[arg(required = true)]
    boards: Vec<String>,

    /// directory holding `<board>/connectors/*.toml` and meta headers
    #[arg(short, long, default_value = "boards")]
    boards_dir: PathBuf,

    /// directory the `<board>.rs` modules are written to
    #[arg(short, long, default_value = "src/boards")]
    out_dir: PathBuf,

    /// fail if a checked-in module differs instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut stale = Vec::new();
    for board in &args.boards {
        if board.parse::<BoardId>().is_err() {
            log::warn!("{board}: not a board ecu-pinout knows, module will not be wired in");
        }

        let inputs = FileSystemBoardInputs::new(&args.boards_dir, board);
        let Some(logic) = PinoutLogic::generate(&inputs)
            .with_context(|| format!("{board}: generation failed"))?
        else {
            continue;
        };
        let text =
            render_board_module(&logic).with_context(|| format!("{board}: render failed"))?;

        let path = args.out_dir.join(module_file_name(board));
        if args.check {
            let current = read_existing(&path)?;
            if !is_current(current.as_deref(), &text) {
                log::error!("{}: out of date", path.display());
                stale.push(path);
            } else {
                log::info!("{}: up to date", path.display());
            }
        } else {
            fs::write(&path, text).with_context(|| format!("cannot write {}", path.display()))?;
            log::info!("{}: written", path.display());
        }
    }

    if !stale.is_empty() {
        bail!("{} board module(s) out of date, rerun without --check", stale.len());
    }
    Ok(())
}

/// Checked-in module text, `None` if there is none yet. Other read errors
/// are not drift and are returned.
fn read_existing(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error).with_context(|| format!("cannot read {}", path.display())),
    }
}

/// A missing module counts as out of date.
fn is_current(on_disk: Option<&str>, generated: &str) -> bool {
    on_disk == Some(generated)
}
