use std::{
    fs, io,
    io::Write,
    path::Path,
};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

pub fn read_json_file<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Saves `data` as pretty-printed JSON, replacing the file atomically.
pub fn save_json_file(path: impl AsRef<Path>, data: impl Serialize) -> anyhow::Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(&data)?;
    write_atomic(path, data.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes `contents` to a temporary file next to `path` and renames it over
/// `path`. Readers observe either the old or the new content, never a mix.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_creates_parents_and_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/file.json");

        write_atomic(&path, b"[1]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1]");

        write_atomic(&path, b"[2, 3]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[2, 3]");

        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary file must not be left behind");
    }

    #[test]
    fn json_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        save_json_file(&path, vec!["a", "b"]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "[\n  \"a\",\n  \"b\"\n]");

        let data: Vec<String> = read_json_file(&path).unwrap();
        assert_eq!(data, ["a", "b"]);
    }

    #[test]
    fn reading_missing_json_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json_file::<Vec<String>>(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
