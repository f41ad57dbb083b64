//! Where a board's description files come from.

use std::fs;
use std::path::PathBuf;

use crate::logic::PinoutError;

/// Source of one board's connector descriptions and the alias headers they
/// reference. Keys are `/`-separated paths relative to the boards directory.
pub trait BoardInputs {
    fn name(&self) -> &str;

    /// Description files for this board, sorted.
    fn description_keys(&self) -> Result<Vec<String>, PinoutError>;

    fn read(&self, key: &str) -> Result<String, PinoutError>;
}

/// Reads `<boards_dir>/<board>/connectors/*.toml`.
pub struct FileSystemBoardInputs {
    boards_dir: PathBuf,
    name: String,
}

impl FileSystemBoardInputs {
    pub fn new(boards_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            boards_dir: boards_dir.into(),
            name: name.into(),
        }
    }
}

impl BoardInputs for FileSystemBoardInputs {
    fn name(&self) -> &str {
        &self.name
    }

    fn description_keys(&self) -> Result<Vec<String>, PinoutError> {
        let dir = self.boards_dir.join(&self.name).join("connectors");
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|error| PinoutError::Io {
            path: dir.display().to_string(),
            error,
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| PinoutError::Io {
                path: dir.display().to_string(),
                error,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(file) = path.file_name().and_then(|f| f.to_str()) {
                    keys.push(format!("{}/connectors/{}", self.name, file));
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn read(&self, key: &str) -> Result<String, PinoutError> {
        let path = self.boards_dir.join(key);
        fs::read_to_string(&path).map_err(|error| PinoutError::Io {
            path: path.display().to_string(),
            error,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;

    use super::*;

    /// In-memory inputs for generator tests.
    pub(crate) struct MemoryInputs {
        pub name: &'static str,
        pub files: BTreeMap<&'static str, &'static str>,
    }

    impl BoardInputs for MemoryInputs {
        fn name(&self) -> &str {
            self.name
        }

        fn description_keys(&self) -> Result<Vec<String>, PinoutError> {
            let prefix = format!("{}/connectors/", self.name);
            Ok(self
                .files
                .keys()
                .filter(|key| key.starts_with(&prefix))
                .map(|key| key.to_string())
                .collect())
        }

        fn read(&self, key: &str) -> Result<String, PinoutError> {
            self.files
                .get(key)
                .map(|text| text.to_string())
                .ok_or_else(|| PinoutError::Io {
                    path: key.to_string(),
                    error: std::io::ErrorKind::NotFound.into(),
                })
        }
    }

    pub(crate) fn repo_boards_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../boards")
    }

    #[test]
    fn lists_connector_files() {
        let inputs = FileSystemBoardInputs::new(repo_boards_dir(), "s105");
        assert_eq!(
            inputs.description_keys().unwrap(),
            vec!["s105/connectors/s105.toml".to_string()]
        );
    }

    #[test]
    fn missing_board_has_no_files() {
        let inputs = FileSystemBoardInputs::new(repo_boards_dir(), "no_such_board");
        assert!(inputs.description_keys().unwrap().is_empty());
    }

    #[test]
    fn reads_meta_header_by_key() {
        let inputs = FileSystemBoardInputs::new(repo_boards_dir(), "uaefi121");
        let header = inputs.read("hellen/hellen_meta.h").unwrap();
        assert!(header.contains("H144_LS_1"));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let inputs = FileSystemBoardInputs::new(repo_boards_dir(), "s105");
        assert!(matches!(
            inputs.read("s105/connectors/missing.toml"),
            Err(PinoutError::Io { .. })
        ));
    }
}
