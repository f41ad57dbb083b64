//! Generated board tables. Regenerate with `cargo run -p pinout-gen -- <board>`.

pub mod s105;
pub mod uaefi121;
