//! Turns connector descriptions into a board's pin name table and output
//! list.
//!
//! Names are keyed by pin id text and kept in a `BTreeMap`, so the same
//! descriptions always produce the same table regardless of entry order.

use std::collections::{BTreeMap, HashMap};

use ecu_pinout::Gpio;
use thiserror::Error as ThisError;

use crate::description::{Description, OneOrMany, PinEntry};
use crate::inputs::BoardInputs;

const DEFINE: &str = "#define";

#[derive(Debug, ThisError)]
pub enum PinoutError {
    #[error("cannot read {path}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },
    #[error("{file}: invalid description")]
    Parse {
        file: String,
        #[source]
        error: toml::de::Error,
    },
    #[error("{id} not expected with meta={meta}")]
    IdWithMeta { id: String, meta: String },
    #[error("empty meta mapping while resolving [{0}]")]
    EmptyMetaMapping(String),
    #[error("failing to resolve [{0}]")]
    UnresolvedMeta(String),
    #[error("expected multiple classes for {0:?}")]
    ExpectedClassArray(Vec<String>),
    #[error("{id}: expected a single class, got {classes:?}")]
    ExpectedSingleClass { id: String, classes: Vec<String> },
    #[error("{pin}: id array length should match class array length: {ids:?} vs {classes:?}")]
    ArrayLengthMismatch {
        pin: String,
        ids: Vec<String>,
        classes: Vec<String>,
    },
    #[error("unexpected empty ID field")]
    EmptyId,
    #[error("ID used multiple times with different ts_name: {0}")]
    ConflictingName(String),
    #[error("{board}: not found {id} in GPIO pins")]
    UnknownPin { board: String, id: String },
}

/// Alias table read from a meta header's `#define NAME VALUE` lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetaMapping(HashMap<String, String>);

impl MetaMapping {
    pub fn parse(header: &str) -> Self {
        let mut map = HashMap::new();
        for line in header.lines() {
            let line = line.replace('\t', " ");
            let Some(rest) = line.trim().strip_prefix(DEFINE) else {
                continue;
            };
            // "#defined" is not a define
            if !rest.starts_with(' ') {
                continue;
            }
            let rest = rest.trim();
            let Some((name, value)) = rest.split_once(' ') else {
                continue;
            };
            map.insert(name.to_string(), normalize_id(value.trim()).to_string());
        }
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alias target, or `id` itself when it is not an alias.
    fn apply<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).unwrap_or(id)
    }
}

/// Pin ids may be spelled `Gpio::D13` in headers and descriptions.
fn normalize_id(id: &str) -> &str {
    id.strip_prefix("Gpio::").unwrap_or(id)
}

/// Key for an id: the `Gpio` name for anything that parses as a pin, so
/// `D13`, `PD13` and `Gpio::D13` are one entry.
fn canonical_id(id: &str) -> String {
    match id.parse::<Gpio>() {
        Ok(pin) => pin.name().to_string(),
        Err(_) => normalize_id(id).to_string(),
    }
}

#[derive(Debug, Default)]
pub struct PinoutLogic {
    board: String,
    sources: Vec<String>,
    name_by_id: BTreeMap<String, String>,
    low_side_outputs: Vec<String>,
    high_side_outputs: Vec<String>,
}

impl PinoutLogic {
    pub fn new(board: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            ..Self::default()
        }
    }

    /// Read every description of a board. `None` for boards without any
    /// description files.
    pub fn generate(inputs: &dyn BoardInputs) -> Result<Option<Self>, PinoutError> {
        let keys = inputs.description_keys()?;
        if keys.is_empty() {
            log::info!("{}: no description files, not generating", inputs.name());
            return Ok(None);
        }

        let mut logic = Self::new(inputs.name());
        for key in &keys {
            let text = inputs.read(key)?;
            let description: Description =
                toml::from_str(&text).map_err(|error| PinoutError::Parse {
                    file: key.clone(),
                    error,
                })?;
            let meta = match &description.meta {
                Some(header) => MetaMapping::parse(&inputs.read(header)?),
                None => MetaMapping::default(),
            };
            logic.add_description(key, &description, &meta)?;
            log::debug!("{}: {} named ids after {}", logic.board, logic.name_by_id.len(), key);
        }
        log::info!(
            "{}: {} named ids from {} file(s)",
            logic.board,
            logic.name_by_id.len(),
            keys.len()
        );
        Ok(Some(logic))
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn add_description(
        &mut self,
        source: &str,
        description: &Description,
        meta: &MetaMapping,
    ) -> Result<(), PinoutError> {
        self.sources.push(source.to_string());
        for entry in &description.pins {
            self.add_entry(entry, meta)?;
        }
        Ok(())
    }

    fn add_entry(&mut self, entry: &PinEntry, meta: &MetaMapping) -> Result<(), PinoutError> {
        let id = match (&entry.id, &entry.meta) {
            (Some(id), Some(meta_name)) => {
                return Err(PinoutError::IdWithMeta {
                    id: format!("{id:?}"),
                    meta: meta_name.clone(),
                });
            }
            (None, Some(meta_name)) => {
                let resolved = meta.get(meta_name).ok_or_else(|| {
                    if meta.is_empty() {
                        PinoutError::EmptyMetaMapping(meta_name.clone())
                    } else {
                        PinoutError::UnresolvedMeta(meta_name.clone())
                    }
                })?;
                Some(OneOrMany::One(resolved.to_string()))
            }
            (id, None) => id.clone(),
        };

        let (Some(id), Some(class), Some(ts_name)) = (id, &entry.class, &entry.ts_name) else {
            log::info!(
                "Skipping {:?}/{:?}/{:?}/{:?}",
                entry.id,
                entry.meta,
                entry.class,
                entry.ts_name
            );
            return Ok(());
        };

        let ts_name = match &entry.pin {
            Some(pin) => ts_name.replace("___", &pin.to_string()),
            None => ts_name.clone(),
        };

        match (id, class) {
            (OneOrMany::Many(ids), OneOrMany::Many(classes)) => {
                if ids.len() != classes.len() {
                    return Err(PinoutError::ArrayLengthMismatch {
                        pin: entry.pin.as_ref().map(ToString::to_string).unwrap_or_default(),
                        ids,
                        classes: classes.clone(),
                    });
                }
                for (id, class) in ids.iter().zip(classes) {
                    // array ids may name aliases too
                    self.add_pin(meta.apply(id), None, &ts_name, class)?;
                }
            }
            (OneOrMany::Many(ids), OneOrMany::One(_)) => {
                return Err(PinoutError::ExpectedClassArray(ids));
            }
            (OneOrMany::One(id), _) if id.is_empty() => return Err(PinoutError::EmptyId),
            (OneOrMany::One(id), OneOrMany::Many(classes)) => {
                return Err(PinoutError::ExpectedSingleClass {
                    id,
                    classes: classes.clone(),
                });
            }
            (OneOrMany::One(id), OneOrMany::One(class)) => {
                self.add_pin(&id, entry.pin_type.as_deref(), &ts_name, class)?;
            }
        }
        Ok(())
    }

    fn add_pin(
        &mut self,
        id: &str,
        pin_type: Option<&str>,
        ts_name: &str,
        class: &str,
    ) -> Result<(), PinoutError> {
        let id = canonical_id(id);
        if let Some(existing) = self.name_by_id.get(&id) {
            if existing != ts_name {
                return Err(PinoutError::ConflictingName(id));
            }
        }
        self.name_by_id.insert(id.clone(), ts_name.to_string());

        if class.eq_ignore_ascii_case("outputs") {
            let low_side = pin_type
                .is_some_and(|t| t.eq_ignore_ascii_case("ls") || t.eq_ignore_ascii_case("inj"));
            // an output is listed once, on the side it first appeared
            let listed = self
                .low_side_outputs
                .iter()
                .chain(&self.high_side_outputs)
                .any(|existing| *existing == id);
            if !listed {
                if low_side {
                    self.low_side_outputs.push(id);
                } else {
                    self.high_side_outputs.push(id);
                }
            }
        }
        Ok(())
    }

    /// GPIO name table in id order. Analog channel ids are left out.
    pub fn pin_names(&self) -> Result<Vec<(Gpio, &str)>, PinoutError> {
        self.name_by_id
            .iter()
            // only GPIO pins carry board names, analog channels do not
            .filter(|(id, _)| !id.contains("ADC"))
            .map(|(id, name)| Ok((self.parse_pin(id)?, name.as_str())))
            .collect()
    }

    /// Low-side outputs, then high-side, each in description order.
    pub fn outputs(&self) -> Result<Vec<Gpio>, PinoutError> {
        self.low_side_outputs
            .iter()
            .chain(&self.high_side_outputs)
            .map(|id| self.parse_pin(id))
            .collect()
    }

    fn parse_pin(&self, id: &str) -> Result<Gpio, PinoutError> {
        id.parse().map_err(|_| PinoutError::UnknownPin {
            board: self.board.clone(),
            id: id.to_string(),
        })
    }
}
