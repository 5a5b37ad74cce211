use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::NamedTempFile;

/// A string-keyed, string-valued slot store with atomic single-key writes.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Key-value store kept as one JSON object on disk.
pub struct JsonFileKv {
    pub path: PathBuf,
}

impl JsonFileKv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(HashMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            AppError::CorruptStorage(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for JsonFileKv {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());

        let data = serde_json::to_string(&items)?;
        replace_file(&self.path, |file| file.write_all(data.as_bytes()))
    }
}

/// Writes a sibling temp file and renames it over `path`. Until the rename
/// the old file is untouched, so a failed `write` leaves it as it was.
fn replace_file(
    path: &Path,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> Result<(), AppError> {
    create_file_parent(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;

    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-memory key-value store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemKv {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemKv {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_keys() -> Result<(), AppError> {
        let dir = tempdir()?;
        let kv = JsonFileKv::new(dir.path().join("nested/storage.json"));

        assert_eq!(kv.get_item("contacts")?, None);

        kv.set_item("contacts", "[]")?;
        kv.set_item("theme", "dark")?;
        kv.set_item("contacts", "[1]")?;

        let reopened = JsonFileKv::new(dir.path().join("nested/storage.json"));
        assert_eq!(reopened.get_item("contacts")?, Some("[1]".to_string()));
        assert_eq!(reopened.get_item("theme")?, Some("dark".to_string()));
        Ok(())
    }

    #[test]
    fn empty_file_is_an_empty_store() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "  \n")?;

        assert_eq!(JsonFileKv::new(&path).get_item("contacts")?, None);
        Ok(())
    }

    #[test]
    fn garbage_file_is_reported_as_corrupt() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json")?;

        let kv = JsonFileKv::new(&path);
        assert!(matches!(
            kv.get_item("contacts"),
            Err(AppError::CorruptStorage(_))
        ));
        // A write must not clobber a file it could not understand.
        assert!(matches!(
            kv.set_item("contacts", "[]"),
            Err(AppError::CorruptStorage(_))
        ));
        assert_eq!(fs::read_to_string(&path)?, "not json");
        Ok(())
    }

    #[test]
    fn failed_write_keeps_previous_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("storage.json");
        let kv = JsonFileKv::new(&path);
        kv.set_item("contacts", r#"[{"name":"Alice","phone":"123"}]"#)?;
        let before = fs::read_to_string(&path)?;

        let result = replace_file(&path, |file| {
            file.write_all(b"{\"contacts\":\"[{\\\"na")?;
            Err(io::Error::other("File too large"))
        });

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(fs::read_to_string(&path)?, before);
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        assert_eq!(
            kv.get_item("contacts")?,
            Some(r#"[{"name":"Alice","phone":"123"}]"#.to_string())
        );
        Ok(())
    }

    #[test]
    fn mem_store_clones_share_slots() -> Result<(), AppError> {
        let kv = MemKv::default();
        let view = kv.clone();

        kv.set_item("contacts", "[]")?;
        assert_eq!(view.get_item("contacts")?, Some("[]".to_string()));
        Ok(())
    }
}
