pub mod memory;
pub mod stores;

use crate::prelude::AppError;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_STORAGE_DIR: &str = "./.instance";

/// Key-value persistence the contact book writes its blob through.
///
/// `get` returns `Ok(None)` when the key has never been written. Any failure
/// to reach the underlying medium must surface as an error, never as `None`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    File,
}

impl StorageMediums {
    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, StorageMediums::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }
}

impl FromStr for StorageMediums {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mem" => Ok(StorageMediums::Mem),
            "file" => Ok(StorageMediums::File),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium (mem, file)",
                s
            ))),
        }
    }
}

/// Builds the storage backend for an already resolved medium and directory.
///
/// Environment and `.env` lookups happen once, in the CLI layer, before this
/// is called. `storage_dir` is ignored for `Mem`.
pub fn parse_storage_type(
    storage_medium: StorageMediums,
    storage_dir: &str,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    match storage_medium {
        StorageMediums::Mem => Ok(Box::new(memory::MemoryStorage::new())),
        StorageMediums::File => Ok(Box::new(stores::FileStorage::new(storage_dir))),
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
