//! Connector description file format.
//!
//! One TOML file per connector, e.g. `boards/s105/connectors/s105.toml`:
//!
//! ```toml
//! meta = "hellen/hellen_meta.h"   # optional alias header
//!
//! [[pins]]
//! pin = "A1"                      # connector pin, substituted for `___`
//! meta = "H144_LS_1"              # or `id = "G7"`
//! class = "outputs"
//! type = "inj"
//! ts_name = "___ - INJ_1"
//! ```

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Description {
    /// Alias header path, relative to the boards directory
    #[serde(default)]
    pub meta: Option<String>,
    #[serde(default)]
    pub pins: Vec<PinEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinEntry {
    #[serde(default)]
    pub id: Option<OneOrMany>,
    #[serde(default)]
    pub meta: Option<String>,
    #[serde(default)]
    pub class: Option<OneOrMany>,
    #[serde(default)]
    pub pin: Option<ConnectorPin>,
    #[serde(default)]
    pub ts_name: Option<String>,
    #[serde(default, rename = "type")]
    pub pin_type: Option<String>,
}

/// A field that holds either one value or one value per pin function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Connector pin as written on the harness drawing: `46` or `"A1"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConnectorPin {
    Number(i64),
    Text(String),
}

impl fmt::Display for ConnectorPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorPin::Number(n) => write!(f, "{n}"),
            ConnectorPin::Text(s) => f.write_str(s),
        }
    }
}
