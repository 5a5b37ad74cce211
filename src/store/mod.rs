pub mod kv;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use kv::{JsonFileKv, KeyValueStore, MemKv};
pub use stores::{CONTACTS_KEY, LocalStorage};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/storage.json";

/// Persistence boundary for the contact collection.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }
}

impl FromStr for StorageMediums {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

impl fmt::Display for StorageMediums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.is_which())
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &Path,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(LocalStorage::new(
            medium.is_which(),
            JsonFileKv::new(path),
        ))),
        StorageMediums::Mem => Ok(Box::new(LocalStorage::new(
            medium.is_which(),
            MemKv::default(),
        ))),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
