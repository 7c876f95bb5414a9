//! Durable record of deployed contract addresses.
//!
//! Each contract kind owns one JSON file holding an array of addresses in
//! deployment order. The file is always replaced as a whole.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use ethers::types::Address;
use tokenkit_common::{files::write_atomic, logger};
use tokenkit_types::WriteMode;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read address registry {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },
    #[error("Failed to write address registry {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Refusing to record {value:?}: not a valid address")]
    InvalidAddress { value: String },
}

impl RegistryError {
    /// `true` when the registry file does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            RegistryError::Read {
                source: ReadFailure::Io(err),
                ..
            } if err.kind() == io::ErrorKind::NotFound
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry #{index} ({value:?}) is not a valid address")]
    InvalidEntry { index: usize, value: String },
}

/// Address registry rooted at the project directory.
#[derive(Debug, Clone)]
pub struct AddressRegistry {
    root: PathBuf,
}

impl AddressRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a path relative to the project root. A leading `/` still
    /// means "relative to the root".
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        let relative = path.strip_prefix("/").unwrap_or(path);
        self.root.join(relative)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<String>, RegistryError> {
        let path = self.resolve(path);
        read_entries(&path).map_err(|source| RegistryError::Read { path, source })
    }

    /// Writes `new_entries` to the registry at `path`, either after the
    /// existing entries or in place of them.
    ///
    /// Appending to a registry that does not exist yet behaves like appending
    /// to an empty one. Any other read failure aborts the write and leaves the
    /// file untouched. Returns the resolved path of the written file.
    pub fn save(
        &self,
        new_entries: &[String],
        path: impl AsRef<Path>,
        mode: WriteMode,
    ) -> Result<PathBuf, RegistryError> {
        if let Some(value) = new_entries.iter().find(|entry| !is_valid_address(entry)) {
            return Err(RegistryError::InvalidAddress {
                value: value.clone(),
            });
        }

        let mut entries = match mode {
            WriteMode::Overwrite => Vec::new(),
            WriteMode::Append => match self.load(&path) {
                Ok(entries) => entries,
                Err(err) if err.is_missing_file() => Vec::new(),
                Err(err) => return Err(err),
            },
        };
        entries.extend_from_slice(new_entries);

        let output_path = self.resolve(&path);
        let write_error = |source| RegistryError::Write {
            path: output_path.clone(),
            source,
        };
        let data = serde_json::to_string_pretty(&entries)
            .map_err(|err| write_error(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        write_atomic(&output_path, data.as_bytes()).map_err(write_error)?;

        logger::info(format!("File written to: {}", output_path.display()));
        Ok(output_path)
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, ReadFailure> {
    let data = fs::read_to_string(path)?;
    let entries: Vec<String> = serde_json::from_str(&data)?;
    if let Some((index, value)) = entries
        .iter()
        .enumerate()
        .find(|(_, entry)| !is_valid_address(entry))
    {
        return Err(ReadFailure::InvalidEntry {
            index,
            value: value.clone(),
        });
    }
    Ok(entries)
}

fn is_valid_address(value: &str) -> bool {
    value.starts_with("0x") && value.len() == 42 && Address::from_str(value).is_ok()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    use super::*;

    const PATH: &str = "addresses/basictoken.json";
    const A: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const B: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
    const C: &str = "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0";

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn registry() -> (TempDir, AddressRegistry) {
        let dir = TempDir::new().unwrap();
        let registry = AddressRegistry::new(dir.path());
        (dir, registry)
    }

    #[test]
    fn overwrite_then_load_round_trips() {
        let (_dir, registry) = registry();
        registry
            .save(&entries(&[A, B, C]), PATH, WriteMode::Overwrite)
            .unwrap();
        assert_eq!(registry.load(PATH).unwrap(), entries(&[A, B, C]));
    }

    #[test]
    fn append_keeps_existing_entries_first() {
        let (_dir, registry) = registry();
        registry
            .save(&entries(&[A]), PATH, WriteMode::Overwrite)
            .unwrap();
        registry
            .save(&entries(&[B]), PATH, WriteMode::Append)
            .unwrap();
        assert_eq!(registry.load(PATH).unwrap(), entries(&[A, B]));
    }

    #[test]
    fn append_to_missing_file_starts_empty() {
        let (_dir, registry) = registry();
        let written = registry
            .save(&entries(&[A]), "fresh/registry.json", WriteMode::Append)
            .unwrap();
        assert!(written.ends_with("fresh/registry.json"));
        assert_eq!(
            registry.load("fresh/registry.json").unwrap(),
            entries(&[A])
        );
    }

    #[test]
    fn overwrite_discards_previous_entries() {
        let (_dir, registry) = registry();
        registry
            .save(&entries(&[A, B]), PATH, WriteMode::Overwrite)
            .unwrap();
        registry
            .save(&entries(&[C]), PATH, WriteMode::Overwrite)
            .unwrap();
        assert_eq!(registry.load(PATH).unwrap(), entries(&[C]));
    }

    #[test]
    fn file_is_pretty_printed_with_two_spaces() {
        let (_dir, registry) = registry();
        let path = registry
            .save(&entries(&[A]), PATH, WriteMode::Overwrite)
            .unwrap();
        let raw = fs::read_to_string(path).unwrap();
        assert_eq!(raw, format!("[\n  \"{A}\"\n]"));
    }

    #[test]
    fn leading_slash_is_relative_to_root() {
        let (dir, registry) = registry();
        assert_eq!(
            registry.resolve("/addresses/basictoken.json"),
            dir.path().join(PATH)
        );
    }

    #[test]
    fn loading_missing_file_is_a_read_error() {
        let (_dir, registry) = registry();
        let err = registry.load(PATH).unwrap_err();
        assert!(err.is_missing_file());
        assert_matches!(err, RegistryError::Read { .. });
    }

    #[test]
    fn malformed_registry_is_not_treated_as_empty() {
        let (dir, registry) = registry();
        write_atomic(&dir.path().join(PATH), b"{ not json").unwrap();

        assert_matches!(
            registry.load(PATH),
            Err(RegistryError::Read {
                source: ReadFailure::Parse(_),
                ..
            })
        );

        let err = registry
            .save(&entries(&[A]), PATH, WriteMode::Append)
            .unwrap_err();
        assert!(!err.is_missing_file());
        assert_eq!(
            fs::read_to_string(dir.path().join(PATH)).unwrap(),
            "{ not json",
            "a failed append must not touch the file"
        );
    }

    #[test]
    fn invalid_entries_are_rejected_on_read() {
        let (dir, registry) = registry();
        write_atomic(&dir.path().join(PATH), br#"["0x1234"]"#).unwrap();
        assert_matches!(
            registry.load(PATH),
            Err(RegistryError::Read {
                source: ReadFailure::InvalidEntry { index: 0, .. },
                ..
            })
        );
    }

    #[test]
    fn invalid_entries_are_rejected_on_write() {
        let (dir, registry) = registry();
        assert_matches!(
            registry.save(&entries(&["nope"]), PATH, WriteMode::Overwrite),
            Err(RegistryError::InvalidAddress { .. })
        );
        assert!(!dir.path().join(PATH).exists());
    }

    #[test]
    fn write_failure_is_reported() {
        let (dir, registry) = registry();
        // A regular file where the parent directory should be.
        fs::write(dir.path().join("addresses"), b"").unwrap();
        assert_matches!(
            registry.save(&entries(&[A]), PATH, WriteMode::Overwrite),
            Err(RegistryError::Write { .. })
        );
    }
}
